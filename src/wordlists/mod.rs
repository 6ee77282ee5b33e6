//! Word lists for the game
//!
//! Provides the embedded dictionary and loading of custom dictionaries. Every
//! entry must encode as a `Word`; a malformed entry is a configuration error.

mod embedded;
mod error;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use error::DictionaryError;
