//! Alphabet bitsets
//!
//! A `LetterSet` packs membership of the 26 letters `a..=z` into the low bits of
//! a `u32`: bit `i` set means letter `b'a' + i` is a member.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of letters from the 26-letter alphabet
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// Every letter `a..=z`
    pub const ALL: Self = Self(0x3ff_ffff);

    /// Number of letters in the alphabet
    pub const ALPHABET_LEN: u8 = 26;

    /// The singleton set for an ASCII letter (either case)
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::LetterSet;
    ///
    /// let m = LetterSet::from_letter(b'm').unwrap();
    /// assert_eq!(m, LetterSet::from_letter(b'M').unwrap());
    /// assert!(LetterSet::from_letter(b'3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_letter(letter: u8) -> Option<Self> {
        if letter.is_ascii_alphabetic() {
            Some(Self(1 << (letter.to_ascii_lowercase() - b'a')))
        } else {
            None
        }
    }

    /// Raw bit representation
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when the set holds exactly one letter
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters of `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True when every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        other.is_superset(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// The alphabetically first letter in the set, lowercase
    #[inline]
    #[must_use]
    pub const fn first(self) -> Option<char> {
        if self.0 == 0 {
            None
        } else {
            Some((b'a' + self.0.trailing_zeros() as u8) as char)
        }
    }

    /// Iterate over the member letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..Self::ALPHABET_LEN)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| (b'a' + i) as char)
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LetterSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for LetterSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for LetterSet {
    type Output = Self;

    /// Complement within the alphabet
    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

impl FromIterator<Self> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::union)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({self})")
    }
}

impl fmt::Binary for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(letters: &str) -> LetterSet {
        letters
            .bytes()
            .filter_map(LetterSet::from_letter)
            .collect()
    }

    #[test]
    fn from_letter_maps_both_cases() {
        assert_eq!(LetterSet::from_letter(b'a').unwrap().bits(), 1);
        assert_eq!(LetterSet::from_letter(b'Z').unwrap().bits(), 1 << 25);
        assert!(LetterSet::from_letter(b'@').is_none());
        assert!(LetterSet::from_letter(b'[').is_none());
        assert!(LetterSet::from_letter(b' ').is_none());
    }

    #[test]
    fn all_has_twenty_six_letters() {
        assert_eq!(LetterSet::ALL.len(), 26);
        assert_eq!(LetterSet::ALL.letters().count(), 26);
        assert!(LetterSet::EMPTY.is_empty());
    }

    #[test]
    fn complement_stays_in_alphabet() {
        let vowels = set("aeiou");
        let consonants = !vowels;
        assert_eq!(consonants.len(), 21);
        assert!(consonants.is_disjoint(vowels));
        assert_eq!(consonants | vowels, LetterSet::ALL);
        assert_eq!(!LetterSet::ALL, LetterSet::EMPTY);
    }

    #[test]
    fn subset_and_superset() {
        let mambo = set("mambo");
        assert_eq!(mambo.len(), 4);
        assert!(mambo.is_superset(set("mob")));
        assert!(set("mob").is_subset(mambo));
        assert!(mambo.is_superset(LetterSet::EMPTY));
        assert!(!mambo.is_superset(set("mz")));
    }

    #[test]
    fn difference_removes_letters() {
        assert_eq!(set("crane").difference(set("ace")), set("rn"));
    }

    #[test]
    fn first_is_lowest_letter() {
        assert_eq!(set("zebra").first(), Some('a'));
        assert_eq!(LetterSet::EMPTY.first(), None);
    }

    #[test]
    fn display_and_binary() {
        let s = set("cab");
        assert_eq!(s.to_string(), "abc");
        assert_eq!(format!("{s:026b}"), "00000000000000000000000111");
        assert_eq!(format!("{s:?}"), "LetterSet(abc)");
    }

    #[test]
    fn single_detection() {
        assert!(set("q").is_single());
        assert!(!set("qr").is_single());
        assert!(!LetterSet::EMPTY.is_single());
    }
}
