//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from the embedded constant.

use super::DictionaryError;
use crate::core::Word;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines and lines starting with `#` are skipped. Repeated words are
/// kept once.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read, if any entry is not a
/// valid 5-letter word, or if the file holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_universe::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = parse_words(&content)?;
    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a dictionary held in memory, one word per line
///
/// # Errors
///
/// Returns `DictionaryError::Entry` for the first line that is not a valid word.
pub fn parse_words(content: &str) -> Result<Vec<Word>, DictionaryError> {
    let entries = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    collect_words(entries)
}

/// Convert an embedded string slice to a Word vector
///
/// # Errors
///
/// Returns `DictionaryError::Entry` for the first entry that is not a valid
/// word; `line` is its 1-based index in the slice.
///
/// # Examples
/// ```
/// use wordle_universe::wordlists::loader::words_from_slice;
/// use wordle_universe::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>, DictionaryError> {
    collect_words(slice.iter().enumerate().map(|(i, &s)| (i + 1, s)))
}

fn collect_words<'s>(
    entries: impl Iterator<Item = (usize, &'s str)>,
) -> Result<Vec<Word>, DictionaryError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (line, entry) in entries {
        let word = Word::new(entry).map_err(|source| DictionaryError::Entry {
            line,
            entry: entry.to_string(),
            source,
        })?;

        if seen.insert(word) {
            words.push(word);
        } else {
            warn!("duplicate dictionary entry {entry:?} on line {line}");
        }
    }

    Ok(words)
}
