//! Formatting utilities for terminal output

use crate::core::{CandidateMask, Feedback, LetterSet, Pattern};
use colored::Colorize;

/// Format a letter set as its 26-digit bit string, `a` in the last column
#[must_use]
pub fn letter_set_bits(set: LetterSet) -> String {
    format!("{set:026b}")
}

/// Format a mask as five comma-separated 26-digit bit strings
#[must_use]
pub fn mask_bits(mask: &CandidateMask) -> String {
    mask.slots()
        .iter()
        .map(|&slot| letter_set_bits(slot))
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a pattern as coloured letter tiles
#[must_use]
pub fn pattern_tiles(pattern: &Pattern) -> String {
    pattern
        .entries()
        .iter()
        .map(|entry| {
            let tile = format!(" {} ", entry.letter.first().unwrap_or('?').to_ascii_uppercase());
            match entry.feedback {
                Feedback::Correct => tile.black().on_green().to_string(),
                Feedback::Present => tile.black().on_yellow().to_string(),
                Feedback::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
