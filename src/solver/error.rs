use crate::graph::GraphError;
use thiserror::Error;

// Error type for solving a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The grid text could not be turned into a board.
    #[error("Invalid grid: {0}")]
    Grid(#[from] GraphError),
}
