use crate::config::{SearchOptions, START_DIRECTION};
use crate::context::SearchContext;
use crate::direction::{movement, Offset};
use crate::error::UnsupportedAlgorithmError;
use crate::pathing_grid::{NodeId, PathingGrid};
use core::fmt;
use itertools::Itertools;
use log::info;
use std::str::FromStr;

pub mod unweighted;
pub mod weighted;

use unweighted::{unweighted_search, Frontier};
use weighted::{weighted_search, WeightedVariant};

/// The search algorithms a caller can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Greedy,
    AStar,
    /// Weighted variant blending step cost, terrain weight and a shaped
    /// heuristic. Fast, not cost-optimal.
    Cla,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Greedy,
        Algorithm::AStar,
        Algorithm::Cla,
    ];

    /// Whether the algorithm takes terrain weight and turns into account.
    pub fn is_weighted(self) -> bool {
        !matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }

    /// Whether the finish distance of a successful run is the cost of its path.
    pub fn accumulates_cost(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "astar",
            Algorithm::Cla => "CLA",
        };
        f.pad(name)
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "greedy" => Ok(Algorithm::Greedy),
            "astar" => Ok(Algorithm::AStar),
            "CLA" | "cla" => Ok(Algorithm::Cla),
            other => Err(UnsupportedAlgorithmError::Algorithm(other.to_owned())),
        }
    }
}

/// Shaping applied to the Manhattan distance by the CLA variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `(step + weight) * manhattan`
    #[default]
    Manhattan,
    /// `weight + step + manhattan^2`
    ManhattanSquared,
    /// `(step + weight) * manhattan^7`
    ManhattanPower7,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::ManhattanSquared => "manhattan-squared",
            Heuristic::ManhattanPower7 => "manhattan-power7",
        };
        f.pad(name)
    }
}

impl FromStr for Heuristic {
    type Err = UnsupportedAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" | "manhattanDistance" => Ok(Heuristic::Manhattan),
            "manhattan-squared" | "poweredManhattanDistance" => Ok(Heuristic::ManhattanSquared),
            "manhattan-power7" | "extraPoweredManhattanDistance" => Ok(Heuristic::ManhattanPower7),
            other => Err(UnsupportedAlgorithmError::Heuristic(other.to_owned())),
        }
    }
}

/// Pure-data events replayed by a rendering sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// A node was settled, in visitation order.
    Visited(NodeId),
    /// A node on the final path, in start-to-finish order.
    Path(NodeId),
}

/// Result of a single search run.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    /// Nodes in the order they were settled, start first.
    pub visited: Vec<NodeId>,
    /// `false` when the frontier ran dry before reaching the finish.
    pub success: bool,
    pub finish: NodeId,
    pub context: SearchContext,
}

impl SearchOutcome {
    /// Nodes strictly between start and finish, see [reconstruct_path].
    pub fn path(&self) -> Vec<NodeId> {
        if self.success {
            reconstruct_path(&self.context, self.finish)
        } else {
            Vec::new()
        }
    }

    /// Cost of the path found when the algorithm accumulates cost along it.
    /// Greedy and CLA distances are rankings rather than costs, use
    /// [path_cost] for those.
    pub fn cost(&self) -> Option<f64> {
        (self.success && self.algorithm.accumulates_cost())
            .then(|| self.context.distance(self.finish))
    }

    /// Visit events in settle order followed by path events.
    pub fn events(&self) -> impl Iterator<Item = SearchEvent> + '_ {
        self.visited
            .iter()
            .map(|&id| SearchEvent::Visited(id))
            .chain(self.path().into_iter().map(SearchEvent::Path))
    }
}

/// Runs `algorithm` from the grid's start to its finish.
pub fn run_search(
    grid: &PathingGrid,
    algorithm: Algorithm,
    options: &SearchOptions,
) -> SearchOutcome {
    let (context, visited, success) = match algorithm {
        Algorithm::Bfs => unweighted_search(grid, Frontier::Breadth),
        Algorithm::Dfs => unweighted_search(grid, Frontier::Depth),
        Algorithm::Dijkstra => weighted_search(grid, WeightedVariant::Dijkstra),
        Algorithm::Greedy => weighted_search(grid, WeightedVariant::Greedy),
        Algorithm::AStar => weighted_search(grid, WeightedVariant::AStar),
        Algorithm::Cla => weighted_search(grid, WeightedVariant::Cla(options.heuristic)),
    };
    info!(
        "{} visited {} nodes, finish {}",
        algorithm,
        visited.len(),
        if success { "reached" } else { "unreachable" }
    );
    SearchOutcome {
        algorithm,
        visited,
        success,
        finish: grid.finish(),
        context,
    }
}

/// Selects the algorithm and heuristic by name, failing before any traversal if
/// either is unknown.
pub fn run_search_named(
    grid: &PathingGrid,
    algorithm: &str,
    heuristic: Option<&str>,
) -> Result<SearchOutcome, UnsupportedAlgorithmError> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    let heuristic = heuristic
        .map(str::parse::<Heuristic>)
        .transpose()?
        .unwrap_or_default();
    Ok(run_search(grid, algorithm, &SearchOptions::new(heuristic)))
}

/// Backtracks from `finish` along parent links and returns the nodes strictly
/// between the root and `finish`, in root-to-finish order. Empty if `finish`
/// was never reached.
pub fn reconstruct_path(context: &SearchContext, finish: NodeId) -> Vec<NodeId> {
    let mut path = context
        .ancestry(finish)
        .skip(1)
        .filter(|&n| context.parent(n).is_some())
        .collect_vec();
    path.reverse();
    path
}

/// Manhattan distance between two nodes.
pub fn manhattan_distance(grid: &PathingGrid, a: NodeId, b: NodeId) -> usize {
    let (a, b) = (grid.node(a), grid.node(b));
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Replays the turn-cost model along start, `path`, finish, facing
/// [START_DIRECTION] initially, and sums `weight + step cost` per step.
/// `None` if two consecutive nodes are not orthogonally adjacent.
pub fn path_cost(grid: &PathingGrid, path: &[NodeId]) -> Option<f64> {
    let route = std::iter::once(grid.start())
        .chain(path.iter().copied())
        .chain(std::iter::once(grid.finish()));
    let mut facing = START_DIRECTION;
    let mut total = 0.0;
    for (from, to) in route.tuple_windows() {
        let offset = Offset::between(grid.node(from).position(), grid.node(to).position())?;
        let step = movement(facing, offset);
        total += grid.weight(to) as f64 + step.cost;
        facing = step.direction;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_algorithm_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("cla".parse::<Algorithm>(), Ok(Algorithm::Cla));
        assert_eq!(
            "bellman-ford".parse::<Algorithm>(),
            Err(UnsupportedAlgorithmError::Algorithm("bellman-ford".into()))
        );
    }

    #[test]
    fn parses_heuristic_names() {
        for heuristic in [
            Heuristic::Manhattan,
            Heuristic::ManhattanSquared,
            Heuristic::ManhattanPower7,
        ] {
            assert_eq!(heuristic.to_string().parse::<Heuristic>(), Ok(heuristic));
        }
        assert_eq!(
            "extraPoweredManhattanDistance".parse::<Heuristic>(),
            Ok(Heuristic::ManhattanPower7)
        );
        assert!("euclidean".parse::<Heuristic>().is_err());
    }

    #[test]
    fn reconstruct_excludes_both_endpoints() {
        let mut ctx = SearchContext::new(5);
        ctx.record_mut(1).parent = Some(0);
        ctx.record_mut(2).parent = Some(1);
        ctx.record_mut(4).parent = Some(2);
        assert_eq!(reconstruct_path(&ctx, 4), vec![1, 2]);
        assert_eq!(reconstruct_path(&ctx, 1), Vec::<NodeId>::new());
        assert_eq!(reconstruct_path(&ctx, 3), Vec::<NodeId>::new());
    }
}
