//! Maze generators. Both mutate the grid in place and return the nodes they
//! changed, in the order they changed, for a rendering sink to animate.
use crate::config::{HEAVY_WEIGHT, WALL_PROBABILITY, WEIGHT_PROBABILITY};
use crate::pathing_grid::{NodeId, PathingGrid};
use core::fmt;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub mod random;
pub mod recursive_division;

use random::random_maze;
use recursive_division::recursive_division;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeKind {
    /// Every cell independently, with a fixed probability.
    Random,
    /// Recursive spatial partition with one passage per dividing line.
    RecursiveDivision,
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeKind::Random => write!(f, "random"),
            MazeKind::RecursiveDivision => write!(f, "recursive division"),
        }
    }
}

/// What a generator turns the selected cells into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MazeTarget {
    Wall,
    /// Heavy terrain of weight [HEAVY_WEIGHT].
    Weight,
}

impl MazeTarget {
    /// Chance that [random_maze](random::random_maze) selects a cell.
    pub fn probability(self) -> f64 {
        match self {
            MazeTarget::Wall => WALL_PROBABILITY,
            MazeTarget::Weight => WEIGHT_PROBABILITY,
        }
    }

    /// Converts a node. Returns whether it changed; start and finish never do.
    pub(crate) fn apply(self, grid: &mut PathingGrid, id: NodeId) -> bool {
        match self {
            MazeTarget::Wall => grid.set_wall_id(id, true),
            MazeTarget::Weight => grid.set_weight_id(id, HEAVY_WEIGHT),
        }
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Runs a generator against `grid` and refreshes its connected components.
pub fn generate_maze<R: Rng>(
    grid: &mut PathingGrid,
    kind: MazeKind,
    target: MazeTarget,
    rng: &mut R,
) -> Vec<NodeId> {
    let changed = match kind {
        MazeKind::Random => random_maze(grid, target, rng),
        MazeKind::RecursiveDivision => recursive_division(grid, target, rng),
    };
    grid.update();
    debug!("{} maze changed {} nodes to {:?}", kind, changed.len(), target);
    changed
}

/// Same as [generate_maze] with a [StdRng] seeded from `seed`, or from OS
/// entropy when `None`.
pub fn generate_maze_seeded(
    grid: &mut PathingGrid,
    kind: MazeKind,
    target: MazeTarget,
    seed: Option<u64>,
) -> Vec<NodeId> {
    let mut rng = get_rng(seed);
    generate_maze(grid, kind, target, &mut rng)
}
