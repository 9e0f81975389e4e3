//! Analyze command - Summarize the reachable position space
//!
//! Enumerates every position legal play can reach, classifies the terminal
//! ones and shows the optimal value of each opening move.

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{describe_cell, describe_outcome, format_number, print_kv, print_section},
    evaluator,
    tictactoe::{GameStatus, Mark, Position, reachable_positions},
};

#[derive(Parser, Debug)]
#[command(about = "Summarize the reachable position space")]
pub struct AnalyzeArgs {
    /// Also evaluate every opening move for X
    #[arg(long)]
    pub openings: bool,
}

/// Counts over the reachable position space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceSummary {
    pub reachable: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

/// Enumerate and classify all reachable positions
pub fn summarize() -> SpaceSummary {
    let positions = reachable_positions();
    let mut summary = SpaceSummary {
        reachable: positions.len(),
        ..SpaceSummary::default()
    };

    for position in &positions {
        match GameStatus::of(position) {
            GameStatus::Running => continue,
            GameStatus::Won(Mark::X) => summary.x_wins += 1,
            GameStatus::Won(Mark::O) => summary.o_wins += 1,
            GameStatus::Draw => summary.draws += 1,
        }
        summary.terminal += 1;
    }

    summary
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let summary = summarize();

    print_section("Reachable position space");
    print_kv("Positions", &format_number(summary.reachable));
    print_kv("Terminal", &format_number(summary.terminal));
    print_kv("X wins", &format_number(summary.x_wins));
    print_kv("O wins", &format_number(summary.o_wins));
    print_kv("Draws", &format_number(summary.draws));

    let root = evaluator::evaluate(Position::empty());
    print_section("Empty board");
    print_kv("Optimal outcome", &describe_outcome(root.predicted_outcome()));
    if let Some(best) = root.best_move {
        print_kv("Chosen opening", &describe_cell(best));
    }

    if args.openings {
        print_section("Openings for X");
        for index in Position::empty().empty_cells() {
            let reply = evaluator::evaluate(Position::empty().play(index));
            print_kv(
                &describe_cell(index),
                &describe_outcome(reply.predicted_outcome()),
            );
        }
    }

    Ok(())
}
