//! In-process configuration: grid shape, endpoint placement and search options.
use crate::direction::Direction;
use crate::solver::Heuristic;

/// Weight of heavy terrain. Walls and open cells carry weight 0.
pub const HEAVY_WEIGHT: u32 = 15;
/// Probability that [random_maze](crate::maze::random::random_maze) turns a cell into a wall.
pub const WALL_PROBABILITY: f64 = 0.25;
/// Probability that [random_maze](crate::maze::random::random_maze) turns a cell into heavy terrain.
pub const WEIGHT_PROBABILITY: f64 = 0.35;
/// Facing of the start node at the beginning of every weighted search.
pub const START_DIRECTION: Direction = Direction::Right;

/// Shape of a grid and where its start and finish nodes sit, as `(row, col)` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: (usize, usize),
    pub finish: (usize, usize),
}

impl GridConfig {
    /// A grid with the start in the top-left and the finish in the bottom-right corner.
    pub fn new(rows: usize, cols: usize) -> GridConfig {
        GridConfig {
            rows,
            cols,
            start: (0, 0),
            finish: (rows.saturating_sub(1), cols.saturating_sub(1)),
        }
    }

    pub fn with_start(mut self, row: usize, col: usize) -> GridConfig {
        self.start = (row, col);
        self
    }

    pub fn with_finish(mut self, row: usize, col: usize) -> GridConfig {
        self.finish = (row, col);
        self
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: 30,
            cols: 30,
            start: (3, 5),
            finish: (16, 22),
        }
    }
}

/// Options passed to [run_search](crate::solver::run_search). The heuristic only
/// shapes the CLA variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub heuristic: Heuristic,
}

impl SearchOptions {
    pub fn new(heuristic: Heuristic) -> SearchOptions {
        SearchOptions { heuristic }
    }
}
