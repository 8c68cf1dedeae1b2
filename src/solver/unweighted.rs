//! Breadth-first and depth-first search over the grid. Both ignore terrain
//! weight and turning; walls are never expanded into.
use crate::context::SearchContext;
use crate::pathing_grid::{NodeId, PathingGrid};
use fxhash::FxHashSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Frontier discipline of [unweighted_search].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frontier {
    /// FIFO queue. Nodes are marked explored when discovered.
    Breadth,
    /// LIFO stack. Nodes are marked explored only once popped, so a node may
    /// sit on the stack several times; the most recent push wins.
    Depth,
}

impl Frontier {
    fn pop(self, frontier: &mut VecDeque<NodeId>) -> Option<NodeId> {
        match self {
            Frontier::Breadth => frontier.pop_front(),
            Frontier::Depth => frontier.pop_back(),
        }
    }
}

/// Runs BFS or DFS from the grid's start. Returns the scratch context, the nodes
/// in visitation order and whether the finish was reached.
pub fn unweighted_search(
    grid: &PathingGrid,
    mode: Frontier,
) -> (SearchContext, Vec<NodeId>, bool) {
    let start = grid.start();
    let target = grid.finish();
    let mut context = SearchContext::for_grid(grid);
    let mut visited = Vec::new();
    let mut explored = FxHashSet::default();
    let mut frontier = VecDeque::from([start]);
    if mode == Frontier::Breadth {
        explored.insert(start);
    }

    while let Some(current) = mode.pop(&mut frontier) {
        if context.is_visited(current) {
            continue;
        }
        if mode == Frontier::Depth {
            explored.insert(current);
        }
        context.mark_visited(current);
        visited.push(current);
        if current == target {
            return (context, visited, true);
        }

        let mut neighbors: SmallVec<[NodeId; 4]> = grid.neighbors(current);
        // Pushed in reverse so up is popped first
        if mode == Frontier::Depth {
            neighbors.reverse();
        }
        for neighbor in neighbors {
            if grid.is_wall(neighbor) || explored.contains(&neighbor) {
                continue;
            }
            if mode == Frontier::Breadth {
                explored.insert(neighbor);
            }
            if neighbor != start {
                context.record_mut(neighbor).parent = Some(current);
            }
            frontier.push_back(neighbor);
        }
    }
    (context, visited, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn bfs_settles_rings_in_order() {
        let grid = PathingGrid::new(&GridConfig::new(3, 3)).unwrap();
        let (_, visited, success) = unweighted_search(&grid, Frontier::Breadth);
        assert!(success);
        assert_eq!(visited, vec![0, 3, 1, 6, 4, 2, 7, 5, 8]);
    }

    #[test]
    fn dfs_dives_upward_first() {
        let grid = PathingGrid::new(&GridConfig::new(3, 3)).unwrap();
        let (context, visited, success) = unweighted_search(&grid, Frontier::Depth);
        assert!(success);
        assert_eq!(visited, vec![0, 3, 6, 7, 4, 1, 2, 5, 8]);
        assert_eq!(context.parent(8), Some(5));
        assert_eq!(context.parent(0), None);
    }

    #[test]
    fn walls_are_not_expanded() {
        let mut grid = PathingGrid::new(&GridConfig::new(3, 3)).unwrap();
        grid.set_wall(1, 0, true);
        grid.set_wall(1, 1, true);
        grid.set_wall(1, 2, true);
        for mode in [Frontier::Breadth, Frontier::Depth] {
            let (_, visited, success) = unweighted_search(&grid, mode);
            assert!(!success);
            assert_eq!(visited.len(), 3);
        }
    }
}
