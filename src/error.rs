//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Main error type for the tic-tac-toe crate
///
/// The evaluator itself never fails. These variants cover the boundaries
/// where external input enters: board text, interactive sessions and agents.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board text has too many cells: expected at most 9, got {got} in '{context}'")]
    TooManyCells { got: usize, context: String },

    #[error("position is not reachable by legal play: {reason} in '{context}'")]
    UnreachablePosition { reason: String, context: String },

    #[error("cell index {index} is out of bounds (must be 0-8)")]
    InvalidIndex { index: usize },

    #[error("invalid move: cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game already over")]
    GameOver,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("agent '{agent}' chose illegal move {index}: {source}")]
    IllegalAgentMove {
        agent: String,
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
