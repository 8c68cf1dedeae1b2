use crate::config::{GridConfig, HEAVY_WEIGHT};
use crate::direction::Offset;
use crate::error::{ConfigurationError, Endpoint};
use core::fmt;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Row-major index of a node, `row * cols + col`.
pub type NodeId = usize;

/// Classification of a node. [NodeStatus::Visited] never lives on the grid
/// itself; it is reported by [SearchContext::status_of](crate::context::SearchContext::status_of)
/// for nodes settled during a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    #[default]
    Default,
    Start,
    Finish,
    Wall,
    Visited,
}

/// One grid cell: fixed position, traversability and terrain weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub row: usize,
    pub col: usize,
    pub id: NodeId,
    pub status: NodeStatus,
    pub weight: u32,
}

impl Node {
    pub fn is_wall(&self) -> bool {
        self.status == NodeStatus::Wall
    }
    /// Start and finish are never edited by walls, weights or maze generators.
    pub fn is_reserved(&self) -> bool {
        matches!(self.status, NodeStatus::Start | NodeStatus::Finish)
    }
    pub fn is_heavy(&self) -> bool {
        self.weight == HEAVY_WEIGHT
    }
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// [PathingGrid] holds the immutable topology of the sandbox (positions,
/// walls and weights) and keeps track of connected components using a
/// [UnionFind] structure so callers can tell whether a finish is reachable at all.
/// Per-run search state lives in [SearchContext](crate::context::SearchContext).
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: NodeId,
    finish: NodeId,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Builds a grid of open nodes with the configured start and finish.
    pub fn new(config: &GridConfig) -> Result<PathingGrid, ConfigurationError> {
        let GridConfig {
            rows,
            cols,
            start,
            finish,
        } = *config;
        if rows == 0 || cols == 0 {
            return Err(ConfigurationError::InvalidDimensions { rows, cols });
        }
        for (endpoint, (row, col)) in [(Endpoint::Start, start), (Endpoint::Finish, finish)] {
            if row >= rows || col >= cols {
                return Err(ConfigurationError::OutOfBounds {
                    endpoint,
                    row,
                    col,
                    rows,
                    cols,
                });
            }
        }
        if start == finish {
            return Err(ConfigurationError::CoincidentEndpoints {
                row: start.0,
                col: start.1,
            });
        }

        let mut nodes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                nodes.push(Node {
                    row,
                    col,
                    id: row * cols + col,
                    status: NodeStatus::Default,
                    weight: 0,
                });
            }
        }
        let start = start.0 * cols + start.1;
        let finish = finish.0 * cols + finish.1;
        nodes[start].status = NodeStatus::Start;
        nodes[finish].status = NodeStatus::Finish;

        let mut grid = PathingGrid {
            rows,
            cols,
            nodes,
            start,
            finish,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Number of nodes, `rows * cols`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn start(&self) -> NodeId {
        self.start
    }
    pub fn finish(&self) -> NodeId {
        self.finish
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
    pub fn node_at(&self, row: usize, col: usize) -> Option<&Node> {
        self.id_of(row, col).map(|id| &self.nodes[id])
    }
    pub fn id_of(&self, row: usize, col: usize) -> Option<NodeId> {
        self.in_bounds(row, col).then(|| row * self.cols + col)
    }
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
    pub fn is_wall(&self, id: NodeId) -> bool {
        self.nodes[id].is_wall()
    }
    pub fn weight(&self, id: NodeId) -> u32 {
        self.nodes[id].weight
    }

    /// In-bounds orthogonal neighbors in up, down, left, right order, paired
    /// with the offset leading to them.
    pub fn neighbors_with_offset(&self, id: NodeId) -> SmallVec<[(NodeId, Offset); 4]> {
        let Node { row, col, .. } = self.nodes[id];
        let mut neighbors = SmallVec::new();
        if row > 0 {
            neighbors.push((id - self.cols, Offset::Up));
        }
        if row + 1 < self.rows {
            neighbors.push((id + self.cols, Offset::Down));
        }
        if col > 0 {
            neighbors.push((id - 1, Offset::Left));
        }
        if col + 1 < self.cols {
            neighbors.push((id + 1, Offset::Right));
        }
        neighbors
    }

    /// In-bounds orthogonal neighbors in up, down, left, right order.
    pub fn neighbors(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        self.neighbors_with_offset(id)
            .into_iter()
            .map(|(n, _)| n)
            .collect()
    }

    /// Turns a node into a wall or back into open ground. Walls carry weight 0.
    /// Returns whether the node changed; start and finish are never changed.
    pub fn set_wall(&mut self, row: usize, col: usize, blocked: bool) -> bool {
        let Some(id) = self.id_of(row, col) else {
            return false;
        };
        self.set_wall_id(id, blocked)
    }

    pub(crate) fn set_wall_id(&mut self, id: NodeId, blocked: bool) -> bool {
        let node = &mut self.nodes[id];
        if node.is_reserved() || node.is_wall() == blocked {
            return false;
        }
        if blocked {
            node.status = NodeStatus::Wall;
            node.weight = 0;
            self.components_dirty = true;
        } else {
            node.status = NodeStatus::Default;
            for n in self.neighbors(id) {
                if !self.nodes[n].is_wall() {
                    self.components.union(id, n);
                }
            }
        }
        true
    }

    /// Sets the terrain weight of an open node. Returns whether the node
    /// changed; walls, start and finish are never changed.
    pub fn set_weight(&mut self, row: usize, col: usize, weight: u32) -> bool {
        let Some(id) = self.id_of(row, col) else {
            return false;
        };
        self.set_weight_id(id, weight)
    }

    pub(crate) fn set_weight_id(&mut self, id: NodeId, weight: u32) -> bool {
        let node = &mut self.nodes[id];
        if node.is_reserved() || node.is_wall() || node.weight == weight {
            return false;
        }
        node.weight = weight;
        true
    }

    /// Removes every wall, leaving weights untouched.
    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut().filter(|n| n.is_wall()) {
            node.status = NodeStatus::Default;
        }
        self.generate_components();
    }

    /// Resets every weight to 0.
    pub fn clear_weights(&mut self) {
        for node in &mut self.nodes {
            node.weight = 0;
        }
    }

    /// Checks if `a` and `b` are on the same component. Components must be up to
    /// date, see [update](Self::update).
    pub fn reachable(&self, a: NodeId, b: NodeId) -> bool {
        !self.is_wall(a) && !self.is_wall(b) && self.components.equiv(a, b)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open orthogonal
    /// neighbours into the same components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for id in 0..self.len() {
            if self.nodes[id].is_wall() {
                continue;
            }
            let Node { row, col, .. } = self.nodes[id];
            // Down and right suffice to cover every undirected edge once
            if row + 1 < self.rows && !self.nodes[id + self.cols].is_wall() {
                self.components.union(id, id + self.cols);
            }
            if col + 1 < self.cols && !self.nodes[id + 1].is_wall() {
                self.components.union(id, id + 1);
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.cols) {
            let line = row
                .iter()
                .map(|n| match n.status {
                    NodeStatus::Start => 'S',
                    NodeStatus::Finish => 'F',
                    NodeStatus::Wall => '#',
                    _ if n.is_heavy() => '~',
                    _ => '.',
                })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
