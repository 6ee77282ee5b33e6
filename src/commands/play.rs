//! Interactive play mode
//!
//! Reads one guess per line, scores it against the hidden target and reports
//! the shrinking universe until at most one candidate remains.

use crate::game::GameSimulator;
use crate::output::display::{write_outcome, write_step, write_words};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// Run the interactive loop until the game finishes, the input ends, or the
/// user quits
///
/// Besides guesses, the loop understands `p` (print the remaining words) and
/// `q`/`quit`. Invalid guesses, blank lines included, are reported and skipped.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut GameSimulator<'_>,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(
        out,
        "{} words in the dictionary. Enter a guess, 'p' to print candidates, 'q' to quit.",
        game.remaining()
    )?;

    let mut line = String::new();
    loop {
        write!(out, "Guess: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input exhausted after {} guesses", game.history().len());
            writeln!(out)?;
            return Ok(());
        }

        match line.trim() {
            "q" | "quit" | "exit" => return Ok(()),
            "p" => write_words(out, game.remaining_words(), None)?,
            guess => match game.process(guess) {
                Ok(step) => {
                    write_step(out, step)?;
                    if game.is_finished() {
                        write_outcome(out, game.status())?;
                        return Ok(());
                    }
                }
                Err(e) => writeln!(out, "{} {e}", "✗".red())?,
            },
        }
    }
}

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_stdio(game: &mut GameSimulator<'_>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play(game, stdin.lock(), &mut stdout.lock())
}
