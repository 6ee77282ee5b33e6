//! Command implementations

pub mod play;
pub mod replay;
pub mod sweep;

pub use play::{run_play, run_play_stdio};
pub use replay::{ReplayConfig, ReplayResult, SkippedGuess, replay};
pub use sweep::{SweepConfig, SweepStatistics, TargetResult, run_sweep};
