//! Subcommand implementations

pub mod analyze;
pub mod evaluate;
pub mod match_cmd;
pub mod play;
