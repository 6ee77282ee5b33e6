//! Dictionary loading errors

use crate::core::WordError;
use std::fmt;
use std::io;

/// Error type for dictionaries that cannot be used
#[derive(Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    Io(io::Error),
    /// An entry is not a valid 5-letter word (`line` is 1-based)
    Entry {
        line: usize,
        entry: String,
        source: WordError,
    },
    /// The dictionary holds no words at all
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read dictionary: {e}"),
            Self::Entry {
                line,
                entry,
                source,
            } => write!(f, "Invalid dictionary entry {entry:?} on line {line}: {source}"),
            Self::Empty => write!(f, "Dictionary contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Entry { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
