//! Feedback pattern calculation and representation
//!
//! A pattern holds one entry per guess position. Each entry carries the guessed
//! letter and one of three feedback kinds:
//! - `Absent` (B): letter not in the target
//! - `Present` (Y): letter in the target, but not at this position
//! - `Correct` (G): letter matches the target at this position

use super::{LetterSet, WORD_LEN, Word};
use std::fmt;

/// Feedback for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Single-letter code: B, Y or G
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => 'B',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// One position of a pattern: the guessed letter and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternEntry {
    pub letter: LetterSet,
    pub feedback: Feedback,
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([PatternEntry; WORD_LEN]);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// The target's letters are collapsed into a single set first, so letter
    /// multiplicity is not tracked: every copy of a guessed letter that occurs
    /// anywhere in the target is at least `Present`, even if the target holds
    /// fewer copies.
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::{Word, Pattern};
    ///
    /// let target = Word::new("mambo").unwrap();
    /// let guess = Word::new("bombs").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(pattern.to_string(), "B:Y O:Y M:G B:G S:B");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let full_set = target.char_set();

        let entries = std::array::from_fn(|i| {
            let letter = guess.letter_at(i);
            let feedback = if letter == target.letter_at(i) {
                Feedback::Correct
            } else if !letter.is_disjoint(full_set) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
            PatternEntry { letter, feedback }
        });

        Self(entries)
    }

    /// Build a pattern from feedback observed outside the engine
    #[must_use]
    pub const fn from_entries(entries: [PatternEntry; WORD_LEN]) -> Self {
        Self(entries)
    }

    /// The five entries in position order
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[PatternEntry; WORD_LEN] {
        &self.0
    }

    /// The feedback kinds in position order
    #[must_use]
    pub fn feedbacks(&self) -> [Feedback; WORD_LEN] {
        self.0.map(|entry| entry.feedback)
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|e| e.feedback == Feedback::Correct)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.count(Feedback::Correct)
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.count(Feedback::Present)
    }

    fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|e| e.feedback == feedback).count()
    }

    /// Letters marked `Present` or `Correct`
    #[must_use]
    pub fn found_letters(&self) -> LetterSet {
        self.0
            .iter()
            .filter(|e| e.feedback != Feedback::Absent)
            .map(|e| e.letter)
            .collect()
    }

    /// Letters marked `Absent`
    #[must_use]
    pub fn absent_letters(&self) -> LetterSet {
        self.0
            .iter()
            .filter(|e| e.feedback == Feedback::Absent)
            .map(|e| e.letter)
            .collect()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::{Word, Pattern};
    ///
    /// let w = Word::new("crane").unwrap();
    /// assert_eq!(Pattern::calculate(&w, &w).to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|e| e.feedback.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    /// Formats as `M:G A:G M:G B:G O:G`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            let letter = entry.letter.first().unwrap_or('?').to_ascii_uppercase();
            write!(f, "{letter}:{}", entry.feedback.code())?;
        }
        Ok(())
    }
}
