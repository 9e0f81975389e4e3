//! Reachability checks and enumeration of the legal position space

use std::collections::HashSet;

use super::{
    lines,
    position::{Mark, Position},
};

impl Position {
    /// Check if the position can arise from legal X-first play
    pub fn is_reachable(&self) -> bool {
        self.unreachable_reason().is_none()
    }

    /// Explain why the position cannot arise from legal play, if it cannot
    pub fn unreachable_reason(&self) -> Option<&'static str> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);

        // X opens, so X is level with O or exactly one ahead
        if !(x_count == o_count || x_count == o_count + 1) {
            return Some("mark counts must be equal or X one ahead");
        }

        let x_wins = self.has_won(Mark::X);
        let o_wins = self.has_won(Mark::O);

        if x_wins && o_wins {
            return Some("both sides have a winning line");
        }

        // The winner must have made the last move
        if x_wins && x_count != o_count + 1 {
            return Some("X has won but O moved last");
        }
        if o_wins && x_count != o_count {
            return Some("O has won but X moved last");
        }

        // Several winning lines are only possible when a single move
        // completed all of them
        if x_wins && !self.winning_lines_share_cell(Mark::X) {
            return Some("X has winning lines that share no cell");
        }
        if o_wins && !self.winning_lines_share_cell(Mark::O) {
            return Some("O has winning lines that share no cell");
        }

        None
    }

    /// Check if all winning lines of a side share at least one cell
    pub fn winning_lines_share_cell(&self, mark: Mark) -> bool {
        let shared = lines::covered_lines(self.cells_of(mark))
            .fold(lines::FULL_BOARD, |acc, line| acc & line);
        shared != 0
    }

    /// Parse the text form and reject positions that legal play cannot reach.
    ///
    /// # Errors
    ///
    /// Returns the parse error of [`Position::from_text`], or
    /// [`crate::Error::UnreachablePosition`] for impossible boards.
    pub fn parse_reachable(text: &str) -> Result<Self, crate::Error> {
        let position = Position::from_text(text)?;
        match position.unreachable_reason() {
            None => Ok(position),
            Some(reason) => Err(crate::Error::UnreachablePosition {
                reason: reason.to_string(),
                context: text.to_string(),
            }),
        }
    }
}

/// Every position reachable from the empty board, stopping at terminal
/// positions. Includes the empty board itself.
pub fn reachable_positions() -> HashSet<Position> {
    let mut seen = HashSet::new();
    let mut stack = vec![Position::empty()];

    while let Some(position) = stack.pop() {
        if !seen.insert(position) {
            continue;
        }
        for index in position.legal_moves() {
            stack.push(position.play(index));
        }
    }

    tracing::debug!(count = seen.len(), "enumerated reachable positions");
    seen
}
