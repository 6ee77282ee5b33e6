//! Game simulation
//!
//! Drives the guess, feedback, narrow loop for one hidden target.

mod simulator;

pub use simulator::{GameSimulator, GameStatus, Step};
