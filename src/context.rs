//! Per-run scratch state. Every search owns a fresh [SearchContext], so the
//! grid topology is never mutated by a run and needs no reset between runs.
use crate::direction::{Direction, Turn};
use crate::pathing_grid::{NodeId, NodeStatus, PathingGrid};

/// Scratch record of a single node during one search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeRecord {
    /// Best known tentative cost from the start.
    pub distance: f64,
    /// `distance + heuristic_distance`, maintained by A* only.
    pub total_distance: f64,
    /// Cached Manhattan estimate to the target, computed once per node by A*.
    pub heuristic_distance: Option<f64>,
    /// Facing on arrival at this node.
    pub direction: Option<Direction>,
    /// Node this one was reached from. Links form a tree rooted at the start.
    pub parent: Option<NodeId>,
    /// Actions taken to step in from the parent.
    pub turns: Option<&'static [Turn]>,
    pub visited: bool,
}

impl Default for NodeRecord {
    fn default() -> NodeRecord {
        NodeRecord {
            distance: f64::INFINITY,
            total_distance: f64::INFINITY,
            heuristic_distance: None,
            direction: None,
            parent: None,
            turns: None,
            visited: false,
        }
    }
}

/// Arena of [NodeRecord]s indexed by [NodeId].
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    records: Vec<NodeRecord>,
}

impl SearchContext {
    pub fn new(len: usize) -> SearchContext {
        SearchContext {
            records: vec![NodeRecord::default(); len],
        }
    }

    pub fn for_grid(grid: &PathingGrid) -> SearchContext {
        SearchContext::new(grid.len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, id: NodeId) -> &NodeRecord {
        &self.records[id]
    }
    pub fn record_mut(&mut self, id: NodeId) -> &mut NodeRecord {
        &mut self.records[id]
    }

    pub fn distance(&self, id: NodeId) -> f64 {
        self.records[id].distance
    }
    pub fn direction(&self, id: NodeId) -> Option<Direction> {
        self.records[id].direction
    }
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.records[id].parent
    }
    pub fn turns(&self, id: NodeId) -> Option<&'static [Turn]> {
        self.records[id].turns
    }
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.records[id].visited
    }

    pub(crate) fn mark_visited(&mut self, id: NodeId) {
        self.records[id].visited = true;
    }

    /// Status as a rendering sink sees it: settled nodes other than the
    /// endpoints read as [NodeStatus::Visited].
    pub fn status_of(&self, grid: &PathingGrid, id: NodeId) -> NodeStatus {
        let node = grid.node(id);
        if self.is_visited(id) && !node.is_reserved() {
            NodeStatus::Visited
        } else {
            node.status
        }
    }

    /// Walks parent links from `id` up to the root, `id` included.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&n| self.parent(n))
    }
}
