//! Game session management

use serde::{Deserialize, Serialize};

use super::{
    lines::CELL_COUNT,
    position::{Mark, Position},
};
use crate::evaluator;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

/// Status of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Draw,
    Won(Mark),
}

impl GameStatus {
    /// Derive the status from a position
    pub fn of(position: &Position) -> Self {
        if let Some(winner) = position.winner() {
            GameStatus::Won(winner)
        } else if position.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::Running
        }
    }

    /// The outcome once the game is over
    pub fn outcome(self) -> Option<GameOutcome> {
        match self {
            GameStatus::Running => None,
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::Won(mark) => Some(GameOutcome::Win(mark)),
        }
    }
}

/// A running game, optionally with the computer playing one side.
///
/// Serializes for reporting only. A game is rebuilt by replaying its
/// history, never read back, so the move list and position cannot disagree.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    position: Position,
    moves: Vec<usize>,
    computer: Option<Mark>,
}

impl Game {
    /// Create a game between two human players
    pub fn new() -> Self {
        Game {
            position: Position::empty(),
            moves: Vec::new(),
            computer: None,
        }
    }

    /// Create a game in which the computer plays `mark`.
    ///
    /// When the computer plays X it opens immediately.
    pub fn against_computer(mark: Mark) -> Self {
        let mut game = Game {
            computer: Some(mark),
            ..Game::new()
        };
        game.let_computer_answer();
        game
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Cell indices played so far, in order
    pub fn history(&self) -> &[usize] {
        &self.moves
    }

    pub fn computer(&self) -> Option<Mark> {
        self.computer
    }

    pub fn to_move(&self) -> Mark {
        self.position.to_move()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.position)
    }

    /// Mark a cell for the side to move.
    ///
    /// If the computer plays the other side and the game is still running,
    /// it answers right away.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over, the index is not a cell, or the
    /// cell is taken. The game is left unchanged in that case.
    pub fn mark(&mut self, index: usize) -> Result<(), crate::Error> {
        self.apply(index)?;
        self.let_computer_answer();
        Ok(())
    }

    /// Let the evaluator choose and play the move for the side to move.
    ///
    /// Returns the index played, or `None` if the game is already over.
    pub fn computer_move(&mut self) -> Option<usize> {
        let index = evaluator::evaluate(self.position).best_move?;
        self.position = self.position.play(index);
        self.moves.push(index);
        tracing::debug!(index, status = ?self.status(), "computer marked cell");
        Some(index)
    }

    fn apply(&mut self, index: usize) -> Result<(), crate::Error> {
        if self.status() != GameStatus::Running {
            return Err(crate::Error::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(crate::Error::InvalidIndex { index });
        }
        if !self.position.is_empty(index) {
            return Err(crate::Error::CellOccupied { index });
        }

        let mark = self.to_move();
        self.position = self.position.play(index);
        self.moves.push(index);
        tracing::debug!(index, %mark, status = ?self.status(), "marked cell");
        Ok(())
    }

    fn let_computer_answer(&mut self) {
        if self.computer == Some(self.to_move()) {
            self.computer_move();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
