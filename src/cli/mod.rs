//! CLI infrastructure for the tic-tac-toe toolkit
//!
//! This module provides the command-line interface for evaluating positions,
//! playing against the computer, running agent matches and analyzing the
//! position space.

pub mod commands;
pub mod config;
pub mod output;
