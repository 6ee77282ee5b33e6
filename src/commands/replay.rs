//! Replay command
//!
//! Plays a fixed list of guesses against a target and records every step.

use crate::core::{Word, WordError};
use crate::game::{GameSimulator, Step};
use crate::universe::MaskPolicy;
use log::info;

/// Configuration for replaying a game
pub struct ReplayConfig {
    pub target: Word,
    pub guesses: Vec<String>,
    pub policy: MaskPolicy,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(target: Word, guesses: Vec<String>) -> Self {
        Self {
            target,
            guesses,
            policy: MaskPolicy::default(),
        }
    }
}

/// A guess that was rejected and skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedGuess {
    pub input: String,
    pub error: WordError,
}

/// Result of replaying a game
pub struct ReplayResult {
    pub target: Word,
    pub steps: Vec<Step>,
    pub skipped: Vec<SkippedGuess>,
    /// Guesses never played because the game had already finished
    pub unplayed: Vec<String>,
    pub remaining: Vec<Word>,
}

impl ReplayResult {
    /// Exactly one candidate remains
    #[must_use]
    pub fn is_narrowed(&self) -> bool {
        self.remaining.len() == 1
    }

    /// The feedback eliminated every word
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Replay the configured guesses against the target
///
/// Invalid guesses are recorded in `skipped` and do not affect the game. Play
/// stops as soon as fewer than two candidates remain.
///
/// # Examples
/// ```
/// use wordle_universe::commands::{ReplayConfig, replay};
/// use wordle_universe::core::Word;
/// use wordle_universe::wordlists::{WORDS, loader::words_from_slice};
///
/// let dictionary = words_from_slice(WORDS).unwrap();
/// let target = Word::new("mambo").unwrap();
/// let config = ReplayConfig::new(target, vec!["mambo".to_string()]);
///
/// let result = replay(config, &dictionary);
/// assert!(result.is_narrowed());
/// assert_eq!(result.remaining, vec![target]);
/// ```
#[must_use]
pub fn replay(config: ReplayConfig, dictionary: &[Word]) -> ReplayResult {
    let mut game = GameSimulator::new(config.target, dictionary).with_policy(config.policy);
    let mut skipped = Vec::new();
    let mut unplayed = Vec::new();

    for input in config.guesses {
        if game.is_finished() {
            unplayed.push(input);
            continue;
        }
        if let Err(error) = game.process(&input) {
            info!("skipping guess {input:?}: {error}");
            skipped.push(SkippedGuess { input, error });
        }
    }

    ReplayResult {
        target: *game.target(),
        steps: game.history().to_vec(),
        skipped,
        unplayed,
        remaining: game.remaining_words().iter().map(|&w| *w).collect(),
    }
}
