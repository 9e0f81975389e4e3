//! Tic-tac-toe CLI - Optimal play from the terminal
//!
//! This CLI provides:
//! - Evaluating a position and its best move
//! - Playing against the computer
//! - Running matches between agents
//! - Analyzing the reachable position space

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive minimax tic-tac-toe", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a position
    Evaluate(tictactoe::cli::commands::evaluate::EvaluateArgs),

    /// Play against the computer
    Play(tictactoe::cli::commands::play::PlayArgs),

    /// Run a series of games between agents
    Match(tictactoe::cli::commands::match_cmd::MatchArgs),

    /// Analyze the reachable position space
    Analyze(tictactoe::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Evaluate(args) => tictactoe::cli::commands::evaluate::execute(args),
        Commands::Play(args) => tictactoe::cli::commands::play::execute(args),
        Commands::Match(args) => tictactoe::cli::commands::match_cmd::execute(args),
        Commands::Analyze(args) => tictactoe::cli::commands::analyze::execute(args),
    }
}
