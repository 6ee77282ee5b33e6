//! Positional candidate masks
//!
//! A `CandidateMask` shares the shape of a `Word` (one `LetterSet` per
//! position) but each slot may hold any number of letters: the letters still
//! allowed at that position.

use super::{Feedback, LetterSet, Pattern, WORD_LEN, Word};
use std::fmt;

/// Letters still allowed at each of the five positions
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMask {
    slots: [LetterSet; WORD_LEN],
}

impl CandidateMask {
    /// Every letter allowed everywhere
    pub const FULL: Self = Self {
        slots: [LetterSet::ALL; WORD_LEN],
    };

    /// Nothing allowed anywhere
    pub const EMPTY: Self = Self {
        slots: [LetterSet::EMPTY; WORD_LEN],
    };

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[LetterSet; WORD_LEN] {
        &self.slots
    }

    /// Letters allowed at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> LetterSet {
        self.slots[position]
    }

    /// Total number of allowed (position, letter) pairs
    #[must_use]
    pub fn total_len(&self) -> u32 {
        self.slots.iter().map(|s| s.len()).sum()
    }

    /// True when the word fits position-wise: each of its letters is allowed
    /// at the slot it occupies
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.slots
            .iter()
            .zip(word.slots())
            .all(|(allowed, letter)| allowed.is_superset(*letter))
    }

    /// Narrow the mask with one feedback pattern
    ///
    /// - `Absent` removes the letter from every position
    /// - `Present` removes the letter from its own position only
    /// - `Correct` pins its position to exactly that letter
    ///
    /// `Absent` is applied globally even if the same letter is `Present` or
    /// `Correct` elsewhere in the same guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::{CandidateMask, Pattern, Word};
    ///
    /// let target = Word::new("mambo").unwrap();
    /// let guess = Word::new("bombs").unwrap();
    /// let mask = CandidateMask::FULL.filter(&Pattern::calculate(&guess, &target));
    ///
    /// assert_eq!(mask.slot(2).to_string(), "m");
    /// assert!(mask.admits(&target));
    /// ```
    #[must_use]
    pub fn filter(mut self, pattern: &Pattern) -> Self {
        for (i, entry) in pattern.entries().iter().enumerate() {
            match entry.feedback {
                Feedback::Absent => {
                    let keep = !entry.letter;
                    for slot in &mut self.slots {
                        *slot &= keep;
                    }
                }
                Feedback::Present => self.slots[i] &= !entry.letter,
                Feedback::Correct => self.slots[i] = entry.letter,
            }
        }
        self
    }

    /// Widen the mask so it also admits `word`
    #[must_use]
    pub fn absorb(mut self, word: &Word) -> Self {
        for (slot, letter) in self.slots.iter_mut().zip(word.slots()) {
            *slot |= *letter;
        }
        self
    }

    /// The concrete word this mask pins down, if every slot holds exactly one
    /// letter
    #[must_use]
    pub fn as_word(&self) -> Option<Word> {
        self.slots
            .iter()
            .all(|s| s.is_single())
            .then(|| Word::from_slots(self.slots))
    }
}

impl Default for CandidateMask {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<&Word> for CandidateMask {
    fn from(word: &Word) -> Self {
        Self {
            slots: *word.slots(),
        }
    }
}

impl<'a> FromIterator<&'a Word> for CandidateMask {
    /// The smallest mask admitting every word in the iterator
    fn from_iter<I: IntoIterator<Item = &'a Word>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::absorb)
    }
}

impl fmt::Display for CandidateMask {
    /// Formats as `[abc][m][...]`, one bracket group per position
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            if *slot == LetterSet::ALL {
                write!(f, "[*]")?;
            } else {
                write!(f, "[{slot}]")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CandidateMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateMask({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn letter(c: u8) -> LetterSet {
        LetterSet::from_letter(c).unwrap()
    }

    fn narrowed(guess: &str, target: &str) -> CandidateMask {
        CandidateMask::FULL.filter(&Pattern::calculate(&word(guess), &word(target)))
    }

    #[test]
    fn full_mask_admits_everything() {
        for s in ["crane", "zzzzz", "mambo"] {
            assert!(CandidateMask::FULL.admits(&word(s)));
        }
        assert_eq!(CandidateMask::FULL.total_len(), 130);
        assert!(!CandidateMask::EMPTY.admits(&word("crane")));
    }

    #[test]
    fn absent_clears_every_position() {
        let mask = narrowed("zzzzz", "mambo");
        for slot in mask.slots() {
            assert!(!slot.is_superset(letter(b'z')));
            assert_eq!(slot.len(), 25);
        }
    }

    #[test]
    fn present_clears_own_position_only() {
        let mask = narrowed("bombs", "mambo");
        // B is present-elsewhere at 0, O at 1
        assert!(!mask.slot(0).is_superset(letter(b'b')));
        assert!(!mask.slot(1).is_superset(letter(b'o')));
        assert!(mask.slot(4).is_superset(letter(b'b')));
        assert!(mask.slot(4).is_superset(letter(b'o')));
    }

    #[test]
    fn correct_pins_position() {
        let mask = narrowed("bombs", "mambo");
        assert_eq!(mask.slot(2), letter(b'm'));
        assert_eq!(mask.slot(3), letter(b'b'));
        // S was absent everywhere
        assert!(mask.slots().iter().all(|s| !s.is_superset(letter(b's'))));
    }

    #[test]
    fn absent_applies_even_when_letter_also_found() {
        // Hand-built feedback: L is correct at 2 and absent at 3 in the same guess
        let guess = word("hello");
        let target = word("hello");
        let mut entries = *Pattern::calculate(&guess, &target).entries();
        entries[3].feedback = Feedback::Absent;
        let pattern = Pattern::from_entries(entries);

        let mask = CandidateMask::FULL.filter(&pattern);
        // L is cleared from every slot Correct did not pin
        assert!(!mask.slot(0).is_superset(letter(b'l')));
        assert!(!mask.slot(3).is_superset(letter(b'l')));
        assert!(!mask.slot(4).is_superset(letter(b'l')));
    }

    #[test]
    fn reapplying_correct_is_idempotent() {
        let pattern = Pattern::calculate(&word("mambo"), &word("mambo"));
        let once = CandidateMask::FULL.filter(&pattern);
        let twice = once.filter(&pattern);
        assert_eq!(once, twice);
        assert_eq!(once.as_word(), Some(word("mambo")));
    }

    #[test]
    fn filter_never_grows_consistent_mask() {
        let target = word("mambo");
        let mut mask = CandidateMask::FULL;
        for guess in ["crane", "bombs", "zzzzz", "limbo", "mambo"] {
            let next = mask.filter(&Pattern::calculate(&word(guess), &target));
            assert!(next.total_len() <= mask.total_len());
            for (after, before) in next.slots().iter().zip(mask.slots()) {
                assert!(after.is_subset(*before));
            }
            mask = next;
        }
    }

    #[test]
    fn absorb_builds_union() {
        let mask: CandidateMask = [word("crane"), word("crate")].iter().collect();
        assert_eq!(mask.slot(3).to_string(), "nt");
        assert!(mask.admits(&word("crane")));
        assert!(mask.admits(&word("crate")));
        assert!(!mask.admits(&word("grate")));
        assert_eq!(mask.as_word(), None);
    }

    #[test]
    fn from_word_is_one_hot() {
        let w = word("slate");
        let mask = CandidateMask::from(&w);
        assert_eq!(mask.total_len(), 5);
        assert_eq!(mask.as_word(), Some(w));
    }

    #[test]
    fn as_word_rejects_empty_slots() {
        assert_eq!(CandidateMask::EMPTY.as_word(), None);
        assert_eq!(CandidateMask::FULL.as_word(), None);
    }

    #[test]
    fn display_groups_slots() {
        let mask = narrowed("mambo", "mambo");
        assert_eq!(mask.to_string(), "[m][a][m][b][o]");
        assert_eq!(CandidateMask::FULL.to_string(), "[*][*][*][*][*]");
    }
}
