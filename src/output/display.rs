//! Display functions for game steps and command results

use super::formatters::{create_progress_bar, letter_set_bits, mask_bits, pattern_tiles};
use crate::commands::{ReplayResult, SweepStatistics};
use crate::core::Word;
use crate::game::{GameStatus, Step};
use colored::Colorize;
use std::io::{self, Write};

/// Words listed per line by `write_words`
const WORDS_PER_LINE: usize = 10;

/// Write one processed guess: pattern, letter constraints, mask and count
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_step<W: Write>(out: &mut W, step: &Step) -> io::Result<()> {
    let universe = &step.universe;

    writeln!(
        out,
        "Pattern {}  {}",
        step.pattern,
        pattern_tiles(&step.pattern)
    )?;
    writeln!(
        out,
        "  solution charset   {} {}",
        letter_set_bits(universe.required()),
        universe.required().to_string().green()
    )?;
    writeln!(
        out,
        "  eliminated charset {} {}",
        letter_set_bits(universe.forbidden()),
        universe.forbidden().to_string().red()
    )?;
    writeln!(out, "  universe {}", universe.mask())?;
    writeln!(out, "           {}", mask_bits(universe.mask()).bright_black())?;
    writeln!(
        out,
        "{}",
        format!(
            "{} possibilities ({} eliminated)",
            step.candidates_after,
            step.candidates_before - step.candidates_after
        )
        .bold()
    )
}

/// Write a list of words, optionally capped at `limit`
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_words<W: Write>(out: &mut W, words: &[&Word], limit: Option<usize>) -> io::Result<()> {
    let shown = limit.unwrap_or(words.len()).min(words.len());

    for chunk in words[..shown].chunks(WORDS_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|w| w.text()).collect();
        writeln!(out, "  {}", line.join(" "))?;
    }
    if shown < words.len() {
        writeln!(out, "  ... and {} more", words.len() - shown)?;
    }
    Ok(())
}

/// Write how the game ended
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_outcome<W: Write>(out: &mut W, status: GameStatus<'_>) -> io::Result<()> {
    match status {
        GameStatus::Narrowed(word) => writeln!(
            out,
            "{} {}",
            "✅ Narrowed to".green().bold(),
            word.text().bright_yellow().bold()
        ),
        GameStatus::Inconsistent => writeln!(
            out,
            "{}",
            "❌ No candidates remain! The target is not in the dictionary.".red()
        ),
        GameStatus::InProgress => Ok(()),
    }
}

/// Write the result of a replay
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_replay_result<W: Write>(
    out: &mut W,
    result: &ReplayResult,
    list: bool,
) -> io::Result<()> {
    const SHOW_WORDS: usize = 30;

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Target: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        writeln!(out, "\nTurn {}: {}", i + 1, step.guess.text().to_uppercase())?;
        write_step(out, step)?;
    }

    for skipped in &result.skipped {
        writeln!(out, "{} {:?}: {}", "✗ skipped".red(), skipped.input, skipped.error)?;
    }
    if !result.unplayed.is_empty() {
        writeln!(
            out,
            "{} {}",
            "Not played (game already finished):".bright_black(),
            result.unplayed.join(" ")
        )?;
    }

    writeln!(out)?;
    if result.is_narrowed() {
        writeln!(
            out,
            "{}",
            format!("✅ Narrowed to one word in {} guesses", result.steps.len())
                .green()
                .bold()
        )?;
    } else if result.is_inconsistent() {
        writeln!(out, "{}", "❌ No candidates remain".red().bold())?;
    } else {
        writeln!(
            out,
            "{}",
            format!("{} candidates remain", result.remaining.len())
                .yellow()
                .bold()
        )?;
    }

    if list || result.remaining.len() <= SHOW_WORDS {
        let words: Vec<&Word> = result.remaining.iter().collect();
        write_words(out, &words, Some(SHOW_WORDS))?;
    }
    Ok(())
}

/// Print the result of a replay to stdout
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_replay_result(result: &ReplayResult, list: bool) -> io::Result<()> {
    let stdout = io::stdout();
    write_replay_result(&mut stdout.lock(), result, list)
}

/// Print sweep statistics
pub fn print_sweep_statistics(stats: &SweepStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Sweep Results ");
    println!("{}", "═".repeat(70));

    let guesses: Vec<String> = stats.guesses.iter().map(|w| w.text().to_uppercase()).collect();
    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Guesses:             {}", guesses.join(" → "));
    println!("  Targets swept:       {}", stats.total_targets);
    if stats.total_targets == 0 {
        return;
    }
    println!(
        "  Narrowed to one:     {} {}",
        stats.narrowed,
        format!(
            "({:.1}%)",
            stats.narrowed as f64 / stats.total_targets as f64 * 100.0
        )
        .green()
    );
    if stats.inconsistent > 0 {
        println!(
            "  Inconsistent:        {}",
            stats.inconsistent.to_string().red()
        );
    }
    println!(
        "  Average remaining:   {}",
        format!("{:.3}", stats.average_remaining)
            .bright_yellow()
            .bold()
    );
    println!("  Worst case:          {}", stats.max_remaining);
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📉 {}", "Average After Each Guess".bright_cyan().bold());
    for (word, avg) in guesses.iter().zip(&stats.average_after_guess) {
        println!("  {word}: {avg:8.2}");
    }

    println!("\n📈 {}", "Remaining Distribution".bright_cyan().bold());
    let mut buckets: Vec<(usize, usize)> = stats
        .distribution
        .iter()
        .map(|(&remaining, &count)| (remaining, count))
        .collect();
    buckets.sort_unstable();
    let max_count = buckets.iter().map(|&(_, c)| c).max().unwrap_or(1);
    for (remaining, count) in buckets.iter().take(15) {
        let pct = *count as f64 / stats.total_targets as f64 * 100.0;
        let bar = create_progress_bar(*count as f64, max_count as f64, 40);
        println!("  {remaining:4}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
    if buckets.len() > 15 {
        println!("  ... {} larger buckets", buckets.len() - 15);
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Targets".yellow().bold());
        for (word, remaining) in stats.hardest.iter().take(5) {
            println!(
                "  {} ({remaining} candidates left)",
                word.text().to_uppercase().yellow()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ReplayConfig, replay};
    use crate::game::GameSimulator;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn dictionary() -> Vec<Word> {
        ["mambo", "limbo", "jumbo", "crane"]
            .iter()
            .map(|s| Word::new(s).unwrap())
            .collect()
    }

    #[test]
    fn step_shows_pattern_sets_and_count() {
        let dict = dictionary();
        let mut game = GameSimulator::new(dict[0], &dict);
        let step = game.process("bombs").unwrap().clone();

        let text = render(|out| write_step(out, &step));

        assert!(text.contains("B:Y O:Y M:G B:G S:B"));
        assert!(text.contains(&letter_set_bits(step.universe.required())));
        assert!(text.contains(&letter_set_bits(step.universe.forbidden())));
        assert!(text.contains("3 possibilities (1 eliminated)"));
    }

    #[test]
    fn words_are_wrapped_and_capped() {
        let dict = dictionary();
        let refs: Vec<&Word> = dict.iter().collect();

        let all = render(|out| write_words(out, &refs, None));
        assert_eq!(all.trim(), "mambo limbo jumbo crane");

        let capped = render(|out| write_words(out, &refs, Some(2)));
        assert!(capped.contains("mambo limbo"));
        assert!(capped.contains("... and 2 more"));
    }

    #[test]
    fn replay_report_lists_turns_and_skips() {
        colored::control::set_override(false);
        let dict = dictionary();
        let config = ReplayConfig::new(
            dict[0],
            vec!["oops".to_string(), "bombs".to_string()],
        );
        let result = replay(config, &dict);

        let text = render(|out| write_replay_result(out, &result, false));

        assert!(text.contains("Target: MAMBO"));
        assert!(text.contains("Turn 1: BOMBS"));
        assert!(text.contains("✗ skipped \"oops\""));
        assert!(text.contains("3 candidates remain"));
        assert!(text.contains("mambo limbo jumbo"));
    }

    #[test]
    fn outcome_messages() {
        let dict = dictionary();
        let narrowed = render(|out| write_outcome(out, GameStatus::Narrowed(&dict[0])));
        assert!(narrowed.contains("mambo"));

        let none = render(|out| write_outcome(out, GameStatus::Inconsistent));
        assert!(none.contains("No candidates remain"));

        let pending = render(|out| write_outcome(out, GameStatus::InProgress));
        assert!(pending.is_empty());
    }
}
