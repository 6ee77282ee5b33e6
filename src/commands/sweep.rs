//! Sweep command
//!
//! Replays one fixed guess sequence against every dictionary word as target and
//! summarises how far each target's universe shrinks.

use crate::core::Word;
use crate::game::GameSimulator;
use crate::universe::MaskPolicy;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}";

/// Configuration for a sweep
pub struct SweepConfig {
    pub guesses: Vec<Word>,
    pub limit: Option<usize>,
    pub policy: MaskPolicy,
    pub show_progress: bool,
}

impl SweepConfig {
    #[must_use]
    pub const fn new(guesses: Vec<Word>) -> Self {
        Self {
            guesses,
            limit: None,
            policy: MaskPolicy::Filtered,
            show_progress: true,
        }
    }
}

/// Candidate counts for one target, one entry per guess
#[derive(Debug, Clone)]
pub struct TargetResult {
    pub target: Word,
    pub initial: usize,
    pub remaining: Vec<usize>,
}

impl TargetResult {
    /// Candidates left after the last guess
    #[must_use]
    pub fn final_remaining(&self) -> usize {
        self.remaining.last().copied().unwrap_or(self.initial)
    }
}

/// Statistics from sweeping all targets
#[derive(Debug)]
pub struct SweepStatistics {
    pub guesses: Vec<Word>,
    pub total_targets: usize,
    /// Targets left with exactly one candidate
    pub narrowed: usize,
    /// Targets left with no candidate
    pub inconsistent: usize,
    pub average_remaining: f64,
    pub max_remaining: usize,
    /// Final candidate count -> number of targets
    pub distribution: FxHashMap<usize, usize>,
    /// Mean candidate count after each guess
    pub average_after_guess: Vec<f64>,
    /// Targets with the most candidates left, largest first
    pub hardest: Vec<(Word, usize)>,
    pub total_time: Duration,
}

/// Run the configured guesses against every dictionary word (or the first
/// `limit` words) as target
///
/// Targets are simulated in parallel; each simulation owns its own state.
#[must_use]
pub fn run_sweep(dictionary: &[Word], config: &SweepConfig) -> SweepStatistics {
    let targets = &dictionary[..config.limit.unwrap_or(dictionary.len()).min(dictionary.len())];
    info!(
        "sweeping {} targets with {} guesses",
        targets.len(),
        config.guesses.len()
    );

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<TargetResult> = targets
        .par_iter()
        .map(|&target| {
            let result = sweep_target(target, dictionary, &config.guesses, config.policy);
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarise(&config.guesses, &results, start.elapsed())
}

fn sweep_target(
    target: Word,
    dictionary: &[Word],
    guesses: &[Word],
    policy: MaskPolicy,
) -> TargetResult {
    let mut game = GameSimulator::new(target, dictionary).with_policy(policy);
    let initial = game.remaining();
    let remaining = guesses
        .iter()
        .map(|&guess| game.guess(guess).candidates_after)
        .collect();

    TargetResult {
        target,
        initial,
        remaining,
    }
}

fn summarise(guesses: &[Word], results: &[TargetResult], total_time: Duration) -> SweepStatistics {
    let total_targets = results.len();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results {
        *distribution.entry(result.final_remaining()).or_insert(0) += 1;
    }

    let narrowed = distribution.get(&1).copied().unwrap_or(0);
    let inconsistent = distribution.get(&0).copied().unwrap_or(0);

    let total: usize = results.iter().map(TargetResult::final_remaining).sum();
    let average_remaining = if total_targets > 0 {
        total as f64 / total_targets as f64
    } else {
        0.0
    };
    let max_remaining = results
        .iter()
        .map(TargetResult::final_remaining)
        .max()
        .unwrap_or(0);

    let average_after_guess = (0..guesses.len())
        .map(|i| {
            let sum: usize = results.iter().map(|r| r.remaining[i]).sum();
            if total_targets > 0 {
                sum as f64 / total_targets as f64
            } else {
                0.0
            }
        })
        .collect();

    let mut hardest: Vec<(Word, usize)> = results
        .iter()
        .filter(|r| r.final_remaining() > 1)
        .map(|r| (r.target, r.final_remaining()))
        .collect();
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    SweepStatistics {
        guesses: guesses.to_vec(),
        total_targets,
        narrowed,
        inconsistent,
        average_remaining,
        max_remaining,
        distribution,
        average_after_guess,
        hardest,
        total_time,
    }
}
