//! Wordle Universe
//!
//! Simulates a five-letter word game against a hidden target and tracks, after every
//! guess, exactly which dictionary words are still consistent with the feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_universe::core::Word;
//! use wordle_universe::game::GameSimulator;
//!
//! let dictionary: Vec<Word> = ["mambo", "limbo", "jumbo", "crane"]
//!     .iter()
//!     .map(|s| Word::new(s).unwrap())
//!     .collect();
//!
//! let mut game = GameSimulator::new(Word::new("mambo").unwrap(), &dictionary);
//! let step = game.process("bombs").unwrap();
//!
//! assert_eq!(step.pattern.to_string(), "B:Y O:Y M:G B:G S:B");
//! assert_eq!(game.remaining(), 3);
//! ```

// Core domain types
pub mod core;

// Constraint accumulation and dictionary rescans
pub mod universe;

// Game simulation
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
