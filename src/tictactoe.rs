//! Tic-Tac-Toe position encoding and game rules

pub mod game;
pub mod lines;
pub mod position;
pub mod validation;

pub use game::{Game, GameOutcome, GameStatus};
pub use lines::{CELL_COUNT, WINNING_LINES, index};
pub use position::{Cell, Mark, Position};
pub use validation::reachable_positions;
