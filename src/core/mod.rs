//! Core domain types for the word game
//!
//! This module contains the bit-level representation with zero external dependencies.
//! A word is five 26-bit letter sets, one per position. The same shape is used for
//! concrete words (`Word`, one letter per slot) and for candidate masks
//! (`CandidateMask`, any number of letters per slot), kept apart as distinct types.

mod letters;
mod mask;
mod pattern;
mod word;

pub use letters::LetterSet;
pub use mask::CandidateMask;
pub use pattern::{Feedback, Pattern, PatternEntry};
pub use word::{WORD_LEN, Word, WordError};
