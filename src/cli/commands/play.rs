//! Play command - Interactive game on the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::ComputerSide, output::describe_outcome},
    tictactoe::{Game, GameStatus},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the computer")]
pub struct PlayArgs {
    /// Side played by the computer
    #[arg(long, value_enum, default_value = "o")]
    pub computer: ComputerSide,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let game = match args.computer.mark() {
        Some(mark) => Game::against_computer(mark),
        None => Game::new(),
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(game, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive a game from line-based input until it ends or input runs out.
///
/// Each line holds a cell index 0-8. Invalid lines are reported and
/// skipped. Returns the final game.
pub fn run_session<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    mut output: W,
) -> Result<Game> {
    writeln!(output, "Cells are numbered 0-8, left to right, top to bottom.")?;
    // A computer playing X has already opened
    for &opening in game.history() {
        writeln!(output, "computer marks {opening}")?;
    }
    writeln!(output, "{}\n", game.position())?;

    let mut lines = input.lines();
    while game.status() == GameStatus::Running {
        write!(output, "{} to move> ", game.to_move())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let index = match line.trim().parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                writeln!(output, "not a cell index: '{}'", line.trim())?;
                continue;
            }
        };

        let before = game.history().len();
        if let Err(err) = game.mark(index) {
            writeln!(output, "{err}")?;
            continue;
        }
        for &reply in &game.history()[before + 1..] {
            writeln!(output, "computer marks {reply}")?;
        }
        writeln!(output, "{}\n", game.position())?;
    }

    if let Some(outcome) = game.status().outcome() {
        writeln!(output, "Game over: {}", describe_outcome(outcome))?;
    }
    Ok(game)
}
