use super::MazeTarget;
use crate::pathing_grid::{NodeId, PathingGrid};
use rand::Rng;

/// Draws one uniform value per node in row-major order and converts the node
/// when the draw falls below the target's probability.
pub fn random_maze<R: Rng>(grid: &mut PathingGrid, target: MazeTarget, rng: &mut R) -> Vec<NodeId> {
    let probability = target.probability();
    let mut changed = Vec::new();
    for id in 0..grid.len() {
        // Drawn for every node, endpoints included, so the sequence only
        // depends on the grid's shape
        let draw: f64 = rng.gen();
        if draw < probability && target.apply(grid, id) {
            changed.push(id);
        }
    }
    changed
}
