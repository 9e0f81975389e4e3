//! Output formatting for CLI

use crate::{GameOutcome, evaluator::Evaluation};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Describe a cell index with its column and row
pub fn describe_cell(index: usize) -> String {
    format!("{index} (column {}, row {})", index % 3, index / 3)
}

pub fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(mark) => format!("{mark} wins"),
        GameOutcome::Draw => "draw".to_string(),
    }
}

/// Print an evaluation as a key-value table
pub fn print_evaluation(evaluation: &Evaluation) {
    print_kv("To move", &evaluation.to_move.to_string());
    print_kv("Rating", &evaluation.rating.to_string());
    print_kv("Absolute rating", &evaluation.absolute_rating().to_string());
    print_kv(
        "Best move",
        &evaluation
            .best_move
            .map(describe_cell)
            .unwrap_or_else(|| "none (game over)".to_string()),
    );
    print_kv(
        "Optimal outcome",
        &describe_outcome(evaluation.predicted_outcome()),
    );
    print_kv("Plies to end", &evaluation.depth.to_string());
}
