//! Tic-Tac-Toe with an exhaustive minimax evaluator
//!
//! This crate provides:
//! - A compact, immutable position encoding with derived turn order
//! - Terminal detection and reachability validation
//! - An evaluator that computes the value of any position and its best move
//! - A game session with an optional computer opponent
//! - Agents and an arena for playing series of games

pub mod agents;
pub mod arena;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod tictactoe;

pub use error::{Error, Result};
pub use evaluator::{Evaluation, evaluate};
pub use tictactoe::{Cell, Game, GameOutcome, GameStatus, Mark, Position};
