//! Terminal output formatting
//!
//! Display utilities for game steps, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_replay_result, print_sweep_statistics};
