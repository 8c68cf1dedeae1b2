//! Directional turn-cost model used by the weighted searches.
//!
//! A mover facing some [Direction] that steps onto an orthogonally adjacent cell
//! pays one action per 90 degree turn plus one action to advance. The four
//! diagonal facings carry fixed intermediate costs without a turn sequence.
//! Neighbor expansion is strictly orthogonal, so no search ever assigns a
//! diagonal facing and those branches stay unreachable until diagonal movement
//! is added.
use core::fmt;

/// Facing of a mover on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

impl Direction {
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpRight | Direction::DownRight | Direction::UpLeft | Direction::DownLeft
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpRight => "up-right",
            Direction::DownRight => "down-right",
            Direction::UpLeft => "up-left",
            Direction::DownLeft => "down-left",
        };
        write!(f, "{name}")
    }
}

/// Position of a neighbor relative to the current node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Offset {
    Up,
    Down,
    Left,
    Right,
}

impl Offset {
    /// Offset leading from `from` to `to` when the two are orthogonally adjacent.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Offset> {
        let (r1, c1) = from;
        let (r2, c2) = to;
        if c1 == c2 && r2 + 1 == r1 {
            Some(Offset::Up)
        } else if c1 == c2 && r1 + 1 == r2 {
            Some(Offset::Down)
        } else if r1 == r2 && c2 + 1 == c1 {
            Some(Offset::Left)
        } else if r1 == r2 && c1 + 1 == c2 {
            Some(Offset::Right)
        } else {
            None
        }
    }
}

impl From<Offset> for Direction {
    fn from(offset: Offset) -> Direction {
        match offset {
            Offset::Up => Direction::Up,
            Offset::Down => Direction::Down,
            Offset::Left => Direction::Left,
            Offset::Right => Direction::Right,
        }
    }
}

/// A single action in a turn sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,
    Right,
    Forward,
}

const FORWARD: &[Turn] = &[Turn::Forward];
const LEFT: &[Turn] = &[Turn::Left, Turn::Forward];
const RIGHT: &[Turn] = &[Turn::Right, Turn::Forward];
const LEFT_ABOUT: &[Turn] = &[Turn::Left, Turn::Left, Turn::Forward];
const RIGHT_ABOUT: &[Turn] = &[Turn::Right, Turn::Right, Turn::Forward];

/// Move descriptor: what it costs to reorient and advance, the actions taken
/// and the facing on arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub cost: f64,
    /// `None` for the diagonal facings, which carry no turn detail.
    pub turns: Option<&'static [Turn]>,
    pub direction: Direction,
}

impl Move {
    fn new(cost: f64, turns: Option<&'static [Turn]>, offset: Offset) -> Move {
        Move {
            cost,
            turns,
            direction: offset.into(),
        }
    }
}

/// Cost of stepping towards `offset` while facing `facing`.
pub fn movement(facing: Direction, offset: Offset) -> Move {
    use Direction as D;
    let (cost, turns) = match offset {
        Offset::Up => match facing {
            D::Up => (1.0, Some(FORWARD)),
            D::Right => (2.0, Some(LEFT)),
            D::Left => (2.0, Some(RIGHT)),
            D::Down => (3.0, Some(RIGHT_ABOUT)),
            D::UpRight | D::UpLeft => (1.5, None),
            D::DownRight | D::DownLeft => (2.5, None),
        },
        Offset::Down => match facing {
            D::Up => (3.0, Some(RIGHT_ABOUT)),
            D::Right => (2.0, Some(RIGHT)),
            D::Left => (2.0, Some(LEFT)),
            D::Down => (1.0, Some(FORWARD)),
            D::UpRight | D::UpLeft => (2.5, None),
            D::DownRight | D::DownLeft => (1.5, None),
        },
        Offset::Left => match facing {
            D::Up => (2.0, Some(LEFT)),
            D::Right => (3.0, Some(LEFT_ABOUT)),
            D::Left => (1.0, Some(FORWARD)),
            D::Down => (2.0, Some(RIGHT)),
            D::UpRight | D::DownRight => (2.5, None),
            D::UpLeft | D::DownLeft => (1.5, None),
        },
        Offset::Right => match facing {
            D::Up => (2.0, Some(RIGHT)),
            D::Right => (1.0, Some(FORWARD)),
            D::Left => (3.0, Some(RIGHT_ABOUT)),
            D::Down => (2.0, Some(LEFT)),
            D::UpRight | D::DownRight => (1.5, None),
            D::UpLeft | D::DownLeft => (2.5, None),
        },
    };
    Move::new(cost, turns, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
    const OFFSETS: [Offset; 4] = [Offset::Up, Offset::Down, Offset::Left, Offset::Right];

    #[test]
    fn straight_ahead_costs_one_action() {
        for offset in OFFSETS {
            let m = movement(offset.into(), offset);
            assert_eq!(m.cost, 1.0);
            assert_eq!(m.turns, Some(FORWARD));
            assert_eq!(m.direction, Direction::from(offset));
        }
    }

    #[test]
    fn turn_count_matches_cost() {
        for facing in CARDINAL {
            for offset in OFFSETS {
                let m = movement(facing, offset);
                let turns = m.turns.unwrap();
                assert_eq!(turns.len() as f64, m.cost);
                assert_eq!(*turns.last().unwrap(), Turn::Forward);
                assert_eq!(m.direction, Direction::from(offset));
            }
        }
    }

    #[test]
    fn reversing_takes_two_turns() {
        assert_eq!(movement(Direction::Down, Offset::Up).turns, Some(RIGHT_ABOUT));
        assert_eq!(movement(Direction::Up, Offset::Down).turns, Some(RIGHT_ABOUT));
        assert_eq!(movement(Direction::Right, Offset::Left).turns, Some(LEFT_ABOUT));
        assert_eq!(movement(Direction::Left, Offset::Right).turns, Some(RIGHT_ABOUT));
    }

    #[test]
    fn quarter_turns_pick_the_right_side() {
        assert_eq!(movement(Direction::Right, Offset::Up).turns, Some(LEFT));
        assert_eq!(movement(Direction::Left, Offset::Up).turns, Some(RIGHT));
        assert_eq!(movement(Direction::Up, Offset::Right).turns, Some(RIGHT));
        assert_eq!(movement(Direction::Down, Offset::Right).turns, Some(LEFT));
        assert_eq!(movement(Direction::Right, Offset::Down).turns, Some(RIGHT));
        assert_eq!(movement(Direction::Up, Offset::Left).turns, Some(LEFT));
    }

    /// Diagonal facings are never produced by orthogonal expansion; these
    /// branches are kept for a future diagonal neighborhood.
    #[test]
    fn diagonal_facings_are_unreachable_but_defined() {
        let expected = [
            (Direction::UpRight, [1.5, 2.5, 2.5, 1.5]),
            (Direction::DownRight, [2.5, 1.5, 2.5, 1.5]),
            (Direction::UpLeft, [1.5, 2.5, 1.5, 2.5]),
            (Direction::DownLeft, [2.5, 1.5, 1.5, 2.5]),
        ];
        for (facing, costs) in expected {
            assert!(facing.is_diagonal());
            for (offset, cost) in OFFSETS.into_iter().zip(costs) {
                let m = movement(facing, offset);
                assert_eq!(m.cost, cost);
                assert!(m.turns.is_none());
                assert!(!m.direction.is_diagonal());
            }
        }
    }

    #[test]
    fn offsets_between_cells() {
        assert_eq!(Offset::between((2, 2), (1, 2)), Some(Offset::Up));
        assert_eq!(Offset::between((2, 2), (3, 2)), Some(Offset::Down));
        assert_eq!(Offset::between((2, 2), (2, 1)), Some(Offset::Left));
        assert_eq!(Offset::between((2, 2), (2, 3)), Some(Offset::Right));
        assert_eq!(Offset::between((2, 2), (3, 3)), None);
        assert_eq!(Offset::between((2, 2), (2, 2)), None);
    }
}
