//! Match command - Play a series of games between two agents

use anyhow::Result;
use clap::Parser;

use crate::{
    arena::{self, SeriesResult},
    cli::{
        config::{AgentKind, MatchConfig},
        output::{format_number, print_kv, print_section},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two agents")]
pub struct MatchArgs {
    /// Agent playing X
    #[arg(long, value_enum, default_value = "minimax")]
    pub x: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value = "random")]
    pub o: AgentKind,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&MatchArgs> for MatchConfig {
    fn from(args: &MatchArgs) -> Self {
        MatchConfig {
            x: args.x,
            o: args.o,
            games: args.games,
            seed: args.seed,
        }
    }
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let config = MatchConfig::from(&args);
    let result = run(&config)?;

    if args.json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    print_section(&format!("{} (X) vs {} (O)", result.x_agent, result.o_agent));
    print_kv("Games", &format_number(result.games));
    print_kv("X wins", &format_number(result.x_wins));
    print_kv("O wins", &format_number(result.o_wins));
    print_kv("Draws", &format_number(result.draws));
    Ok(())
}

/// Run the series described by `config`
pub fn run(config: &MatchConfig) -> Result<SeriesResult> {
    tracing::info!(?config, "starting match");
    let mut x_agent = config.x.build(config.x_seed());
    let mut o_agent = config.o.build(config.o_seed());
    let result = arena::play_series(x_agent.as_mut(), o_agent.as_mut(), config.games)?;
    Ok(result)
}
