//! Concrete word encoding
//!
//! A `Word` stores a 5-letter word as one single-letter `LetterSet` per position.
//! This is the only way to build a concrete word, so every `Word` is one-hot in
//! every slot.

use super::LetterSet;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter word in positional one-hot form
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    slots: [LetterSet; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Input did not have exactly five characters
    BadLength(usize),
    /// A character that is not an ASCII letter
    BadChar { position: usize, found: char },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::BadChar { position, found } => {
                write!(f, "Word has invalid character {found:?} at position {}", position + 1)
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Encode a word from a string
    ///
    /// Letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::Word;
    ///
    /// let word = Word::new("Mambo").unwrap();
    /// assert_eq!(word.text(), "mambo");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::BadLength(len));
        }

        let mut slots = [LetterSet::EMPTY; WORD_LEN];
        for (position, (slot, ch)) in slots.iter_mut().zip(text.chars()).enumerate() {
            *slot = u8::try_from(ch)
                .ok()
                .and_then(LetterSet::from_letter)
                .ok_or(WordError::BadChar {
                    position,
                    found: ch,
                })?;
        }

        Ok(Self { slots })
    }

    /// The per-position letter sets, each holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[LetterSet; WORD_LEN] {
        &self.slots
    }

    /// The letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> LetterSet {
        self.slots[position]
    }

    /// The distinct letters of the word, ignoring position and multiplicity
    #[inline]
    #[must_use]
    pub fn char_set(&self) -> LetterSet {
        self.slots.iter().copied().collect()
    }

    /// Decode back to lowercase text
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Wrap slots already known to be one-hot
    pub(crate) const fn from_slots(slots: [LetterSet; WORD_LEN]) -> Self {
        Self { slots }
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            if let Some(letter) = slot.first() {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}
