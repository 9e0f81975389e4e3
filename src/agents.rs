//! Agents that choose moves for one side of a game
//!
//! An [`Agent`] is the seam between the game loop and whatever decides the
//! moves: the exhaustive evaluator, or a uniform random baseline.

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{Result, evaluator, tictactoe::Position};

/// Anything that can pick a cell to mark
pub trait Agent: Send {
    /// Display name used in logs and reports
    fn name(&self) -> &str;

    /// Select a cell (0-8) for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalMoves`] if the position is terminal.
    fn select_move(&mut self, position: &Position) -> Result<usize>;
}

/// Plays the evaluator's best move
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxAgent;

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn select_move(&mut self, position: &Position) -> Result<usize> {
        evaluator::evaluate(*position)
            .best_move
            .ok_or(crate::Error::NoLegalMoves)
    }
}

/// Marks a uniformly random empty cell
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create a random agent, reproducible when a seed is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        RandomAgent { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, position: &Position) -> Result<usize> {
        position
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_takes_the_win() {
        let position: Position = "XO.XO....".parse().unwrap();
        assert_eq!(MinimaxAgent.select_move(&position).unwrap(), 6);
    }

    #[test]
    fn test_terminal_position_has_no_moves() {
        let position: Position = "XXX\nOO.\n...".parse().unwrap();
        assert!(matches!(
            MinimaxAgent.select_move(&position),
            Err(crate::Error::NoLegalMoves)
        ));
        assert!(matches!(
            RandomAgent::new(Some(1)).select_move(&position),
            Err(crate::Error::NoLegalMoves)
        ));
    }

    #[test]
    fn test_random_agent_picks_empty_cells() {
        let position: Position = "XO.\n.X.\nO..".parse().unwrap();
        let mut agent = RandomAgent::new(Some(7));
        for _ in 0..50 {
            let index = agent.select_move(&position).unwrap();
            assert!(position.is_empty(index));
        }
    }

    #[test]
    fn test_random_agent_is_reproducible_with_seed() {
        let position = Position::empty();
        let mut first = RandomAgent::new(Some(42));
        let mut second = RandomAgent::new(Some(42));
        for _ in 0..20 {
            assert_eq!(
                first.select_move(&position).unwrap(),
                second.select_move(&position).unwrap()
            );
        }
    }
}
