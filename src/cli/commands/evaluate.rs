//! Evaluate command - Compute the optimal move for a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_evaluation, print_section},
    evaluator,
    tictactoe::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a position with exhaustive minimax")]
pub struct EvaluateArgs {
    /// Board as nine cells of '.', 'X' and 'O'; other characters are ignored
    /// (e.g. "XO.|XO.|...")
    pub board: String,

    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,

    /// Accept positions that legal play cannot reach
    #[arg(long)]
    pub allow_unreachable: bool,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let position = if args.allow_unreachable {
        Position::from_text(&args.board)?
    } else {
        Position::parse_reachable(&args.board)?
    };
    let evaluation = evaluator::evaluate(position);

    if args.json {
        let report = serde_json::json!({
            "position": position,
            "evaluation": evaluation,
            "absolute_rating": evaluation.absolute_rating(),
            "outcome": evaluation.predicted_outcome(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    println!("{position}");
    print_section("Evaluation");
    print_evaluation(&evaluation);
    Ok(())
}
