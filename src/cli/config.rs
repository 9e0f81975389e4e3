//! Shared configuration types for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    agents::{Agent, MinimaxAgent, RandomAgent},
    tictactoe::Mark,
};

/// Kind of agent controlling one side in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Exhaustive minimax, always optimal
    Minimax,
    /// Uniformly random legal moves
    Random,
}

impl AgentKind {
    /// Build the agent, seeding it when it draws random moves
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent),
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
        }
    }
}

/// Which side the computer plays in an interactive game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComputerSide {
    X,
    O,
    None,
}

impl ComputerSide {
    pub fn mark(self) -> Option<Mark> {
        match self {
            ComputerSide::X => Some(Mark::X),
            ComputerSide::O => Some(Mark::O),
            ComputerSide::None => None,
        }
    }
}

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Agent playing X
    pub x: AgentKind,

    /// Agent playing O
    pub o: AgentKind,

    /// Number of games
    pub games: usize,

    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Seed for the X agent
    pub fn x_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Seed for the O agent, offset so two random agents differ
    pub fn o_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(1))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x: AgentKind::Minimax,
            o: AgentKind::Random,
            games: 100,
            seed: None,
        }
    }
}
