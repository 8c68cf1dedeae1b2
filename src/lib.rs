//! # grid_sandbox
//!
//! Search and maze-generation engine for a grid pathfinding sandbox. A
//! [PathingGrid] of nodes with one start and one finish can be populated with
//! walls or heavy terrain by a [maze generator](maze::generate_maze) and then
//! searched with one of six algorithms:
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm), greedy
//! best-first, [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and
//! CLA, a weighted variant with a configurable heuristic shaping.
//!
//! The weighted algorithms charge for turning: see [direction::movement].
//! Every run returns the nodes in the order they were settled plus the parent
//! links needed to rebuild the path, as plain data a renderer can replay.
//!
//! ```
//! use grid_sandbox::{run_search, Algorithm, GridConfig, PathingGrid, SearchOptions};
//!
//! let grid = PathingGrid::new(&GridConfig::new(5, 5)).unwrap();
//! let outcome = run_search(&grid, Algorithm::Dijkstra, &SearchOptions::default());
//! assert!(outcome.success);
//! assert_eq!(outcome.path().len(), 7);
//! ```
pub mod config;
pub mod context;
pub mod direction;
pub mod error;
pub mod maze;
pub mod pathing_grid;
pub mod solver;

pub use config::{GridConfig, SearchOptions};
pub use context::SearchContext;
pub use error::{ConfigurationError, UnsupportedAlgorithmError};
pub use maze::{generate_maze, generate_maze_seeded, MazeKind, MazeTarget};
pub use pathing_grid::{Node, NodeId, NodeStatus, PathingGrid};
pub use solver::{
    path_cost, reconstruct_path, run_search, run_search_named, Algorithm, Heuristic,
    SearchEvent, SearchOutcome,
};
