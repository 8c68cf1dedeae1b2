//! Error types for grid construction and algorithm selection.
//!
//! An unreachable target is not an error: searches report it through
//! [SearchOutcome::success](crate::solver::SearchOutcome::success).

/// Which endpoint of the search a configuration problem refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Finish => write!(f, "finish"),
        }
    }
}

/// Raised by [PathingGrid::new](crate::pathing_grid::PathingGrid::new) when the
/// [GridConfig](crate::config::GridConfig) cannot describe a valid grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Both dimensions must be at least one cell.
    #[error("invalid grid dimensions: {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{endpoint} node ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("start and finish both placed at ({row}, {col})")]
    CoincidentEndpoints { row: usize, col: usize },
}

/// Raised when an algorithm or heuristic is selected by a name this crate does
/// not know. Always reported before any traversal begins.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedAlgorithmError {
    #[error("unsupported search algorithm: {0:?}")]
    Algorithm(String),

    #[error("unsupported heuristic: {0:?}")]
    Heuristic(String),
}
