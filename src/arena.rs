//! Play agents against each other and tally the results

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agents::Agent,
    tictactoe::{Game, GameOutcome, Mark},
};

/// Results of a series of games between the same two agents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub x_agent: String,
    pub o_agent: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesResult {
    /// Pretty-printed JSON report of the series
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Mark::X) => self.x_wins += 1,
            GameOutcome::Win(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play one game to the end, `x_agent` opening.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalAgentMove`] if an agent picks a cell the
/// game rejects, or the agent's own error.
pub fn play_game(x_agent: &mut dyn Agent, o_agent: &mut dyn Agent) -> Result<GameOutcome> {
    let mut game = Game::new();

    loop {
        if let Some(outcome) = game.status().outcome() {
            tracing::trace!(?outcome, moves = ?game.history(), "game finished");
            return Ok(outcome);
        }

        let agent: &mut dyn Agent = match game.to_move() {
            Mark::X => &mut *x_agent,
            Mark::O => &mut *o_agent,
        };
        let index = agent.select_move(&game.position())?;
        game.mark(index)
            .map_err(|source| crate::Error::IllegalAgentMove {
                agent: agent.name().to_string(),
                index,
                source: Box::new(source),
            })?;
    }
}

/// Play `games` games with the same agents on the same sides.
///
/// # Errors
///
/// Stops at the first game that fails, see [`play_game`].
pub fn play_series(
    x_agent: &mut dyn Agent,
    o_agent: &mut dyn Agent,
    games: usize,
) -> Result<SeriesResult> {
    let mut result = SeriesResult {
        x_agent: x_agent.name().to_string(),
        o_agent: o_agent.name().to_string(),
        ..SeriesResult::default()
    };

    for _ in 0..games {
        let outcome = play_game(x_agent, o_agent)?;
        result.record(outcome);
    }

    tracing::info!(
        x = %result.x_agent,
        o = %result.o_agent,
        games = result.games,
        x_wins = result.x_wins,
        o_wins = result.o_wins,
        draws = result.draws,
        "series finished"
    );
    Ok(result)
}
