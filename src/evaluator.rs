//! Exhaustive minimax evaluation of tic-tac-toe positions
//!
//! Ratings are reported from the point of view of the side to move:
//! [`WIN`] if it wins with optimal play, [`LOSS`] if it loses and [`DRAW`]
//! otherwise. Each ply negates the child's rating. When two moves lead to
//! the same rating the search depth decides: a won position prefers the
//! quickest win, anything else prefers the longest resistance. Exact ties
//! keep the lowest cell index.

use std::cmp::Ordering;

use serde::Serialize;

use crate::tictactoe::{GameOutcome, Mark, Position};

/// Rating of a position won by the side to move
pub const WIN: i32 = 100;
/// Rating of a drawn position
pub const DRAW: i32 = 0;
/// Rating of a position lost by the side to move
pub const LOSS: i32 = -WIN;

/// Result of evaluating a position with optimal play from both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Value for the side to move: [`WIN`], [`DRAW`] or [`LOSS`]
    pub rating: i32,
    /// Cell index achieving the rating, `None` for terminal positions
    pub best_move: Option<usize>,
    /// Ply, counted from the evaluated position, at which the principal
    /// line ends
    pub depth: u32,
    /// Side to move in the evaluated position
    pub to_move: Mark,
}

impl Evaluation {
    /// Rating in the absolute convention: [`WIN`] means X wins, [`LOSS`]
    /// means O wins.
    pub fn absolute_rating(&self) -> i32 {
        match self.to_move {
            Mark::X => self.rating,
            Mark::O => -self.rating,
        }
    }

    /// Outcome of the game if both sides keep playing optimally
    pub fn predicted_outcome(&self) -> GameOutcome {
        match self.rating.cmp(&DRAW) {
            Ordering::Greater => GameOutcome::Win(self.to_move),
            Ordering::Less => GameOutcome::Win(self.to_move.opponent()),
            Ordering::Equal => GameOutcome::Draw,
        }
    }

    /// Whether the evaluated position was already over
    pub fn is_terminal(&self) -> bool {
        self.best_move.is_none()
    }

    /// Secondary sort key: win sooner, lose (or draw) later
    fn urgency(&self) -> i64 {
        if self.rating > DRAW {
            -i64::from(self.depth)
        } else {
            i64::from(self.depth)
        }
    }

    fn strength_cmp(&self, other: &Evaluation) -> Ordering {
        self.rating
            .cmp(&other.rating)
            .then_with(|| self.urgency().cmp(&other.urgency()))
    }
}

/// Compute the game-theoretic value of `position` and the move achieving it.
///
/// Safe to call on any position, including finished ones: a won or drawn
/// board yields its terminal rating and no move.
pub fn evaluate(position: Position) -> Evaluation {
    let evaluation = search(position, position.to_move(), 0);
    tracing::debug!(
        position = %position.to_string().replace('\n', "|"),
        rating = evaluation.rating,
        best_move = ?evaluation.best_move,
        depth = evaluation.depth,
        "evaluated position"
    );
    evaluation
}

fn search(position: Position, to_move: Mark, depth: u32) -> Evaluation {
    if let Some(winner) = position.winner() {
        let rating = if winner == to_move { WIN } else { LOSS };
        return terminal(rating, depth, to_move);
    }

    let mut best: Option<Evaluation> = None;
    for index in position.empty_cells() {
        let child = search(position.with_mark(index, to_move), to_move.opponent(), depth + 1);
        let candidate = Evaluation {
            rating: -child.rating,
            best_move: Some(index),
            depth: child.depth,
            to_move,
        };

        // Only a strictly stronger move replaces the incumbent
        let replace = match &best {
            None => true,
            Some(current) => candidate.strength_cmp(current) == Ordering::Greater,
        };
        if replace {
            best = Some(candidate);
        }
    }

    // No empty cell and no winner: a full board
    best.unwrap_or_else(|| terminal(DRAW, depth, to_move))
}

fn terminal(rating: i32, depth: u32, to_move: Mark) -> Evaluation {
    Evaluation {
        rating,
        best_move: None,
        depth,
        to_move,
    }
}
