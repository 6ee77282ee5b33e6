//! Universe state and per-guess narrowing

use super::MaskPolicy;
use crate::core::{CandidateMask, LetterSet, Pattern, Word};
use log::debug;

/// Everything learned so far about the target
///
/// A dictionary word belongs to the universe when it fits the positional mask,
/// contains every `required` letter, and contains no `forbidden` letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Universe {
    mask: CandidateMask,
    required: LetterSet,
    forbidden: LetterSet,
}

/// The result of folding one guess into a universe
#[derive(Debug, Clone)]
pub struct Narrowing<'a> {
    pub universe: Universe,
    pub pattern: Pattern,
    pub members: Vec<&'a Word>,
}

impl Narrowing<'_> {
    /// Number of dictionary words still in the universe
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.members.len()
    }
}

impl Universe {
    /// Nothing known yet: every letter allowed everywhere
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mask: CandidateMask::FULL,
            required: LetterSet::EMPTY,
            forbidden: LetterSet::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> &CandidateMask {
        &self.mask
    }

    /// Letters known to occur somewhere in the target
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// Letters known not to occur anywhere in the target
    #[inline]
    #[must_use]
    pub const fn forbidden(&self) -> LetterSet {
        self.forbidden
    }

    /// Membership test for a concrete word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        let letters = word.char_set();
        self.mask.admits(word)
            && letters.is_superset(self.required)
            && letters.is_disjoint(self.forbidden)
    }

    /// Fold one pattern into the letter constraints and the positional mask
    ///
    /// Does not touch the dictionary.
    #[must_use]
    pub fn learn(&self, pattern: &Pattern) -> Self {
        Self {
            mask: self.mask.filter(pattern),
            required: self.required | pattern.found_letters(),
            forbidden: self.forbidden | pattern.absent_letters(),
        }
    }

    /// Dictionary words currently in the universe, in dictionary order
    pub fn members<'a>(&self, dictionary: &'a [Word]) -> Vec<&'a Word> {
        dictionary.iter().filter(|w| self.contains(w)).collect()
    }

    /// Number of dictionary words currently in the universe
    pub fn count(&self, dictionary: &[Word]) -> usize {
        dictionary.iter().filter(|w| self.contains(w)).count()
    }

    /// Score `guess` against `target`, fold the feedback in, and rescan the
    /// dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::Word;
    /// use wordle_universe::universe::{MaskPolicy, Universe};
    ///
    /// let dictionary: Vec<Word> = ["mambo", "limbo", "crane"]
    ///     .iter()
    ///     .map(|s| Word::new(s).unwrap())
    ///     .collect();
    /// let target = dictionary[0];
    ///
    /// let step = Universe::new().update(&dictionary[1], &target, &dictionary, MaskPolicy::Filtered);
    /// assert_eq!(step.remaining(), 1);
    /// assert_eq!(step.members[0].text(), "mambo");
    /// ```
    #[must_use]
    pub fn update<'a>(
        &self,
        guess: &Word,
        target: &Word,
        dictionary: &'a [Word],
        policy: MaskPolicy,
    ) -> Narrowing<'a> {
        let pattern = Pattern::calculate(guess, target);
        let mut universe = self.learn(&pattern);
        let members = universe.members(dictionary);
        universe.mask = policy.settle(universe.mask, &members);

        debug!(
            "guess {guess} -> {pattern}: {} candidates (required {}, forbidden {})",
            members.len(),
            universe.required,
            universe.forbidden
        );

        Narrowing {
            universe,
            pattern,
            members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    const WORDS: &[&str] = &[
        "mambo", "limbo", "bombs", "combo", "jumbo", "crane", "slate", "zebra", "pizza", "mango",
        "amber", "album",
    ];

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dictionary() -> Vec<Word> {
        WORDS.iter().map(|s| word(s)).collect()
    }

    fn texts(members: &[&Word]) -> Vec<String> {
        members.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn fresh_universe_contains_everything() {
        let dict = dictionary();
        let universe = Universe::new();

        assert_eq!(universe.count(&dict), dict.len());
        assert!(universe.required().is_empty());
        assert!(universe.forbidden().is_empty());
        assert_eq!(universe, Universe::default());
    }

    #[test]
    fn guessing_target_leaves_only_target() {
        let dict = dictionary();
        let target = word("mambo");

        let step = Universe::new().update(&target, &target, &dict, MaskPolicy::Filtered);

        assert_eq!(step.pattern.to_string(), "M:G A:G M:G B:G O:G");
        assert_eq!(step.remaining(), 1);
        assert_eq!(texts(&step.members), ["mambo"]);
    }

    #[test]
    fn all_absent_guess_removes_only_words_with_that_letter() {
        let dict = dictionary();
        let target = word("mambo");
        let before = Universe::new().count(&dict);
        let with_z = dict.iter().filter(|w| w.text().contains('z')).count();

        let step = Universe::new().update(&word("zzzzz"), &target, &dict, MaskPolicy::Filtered);

        assert_eq!(step.pattern.to_string(), "Z:B Z:B Z:B Z:B Z:B");
        assert_eq!(step.universe.forbidden().to_string(), "z");
        assert!(step.universe.required().is_empty());
        assert_eq!(step.remaining(), before - with_z);
    }

    #[test]
    fn mixed_feedback_updates_letter_sets() {
        let dict = dictionary();
        let target = word("mambo");

        let step = Universe::new().update(&word("bombs"), &target, &dict, MaskPolicy::Filtered);

        assert_eq!(
            step.pattern.feedbacks(),
            [
                Feedback::Present,
                Feedback::Present,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Absent
            ]
        );
        assert_eq!(step.universe.required().to_string(), "bmo");
        assert_eq!(step.universe.forbidden().to_string(), "s");
        // ??MB? with b, m, o somewhere, no s, no b at 0, no o at 1
        assert_eq!(texts(&step.members), ["mambo", "limbo", "jumbo"]);
    }

    #[test]
    fn contains_checks_all_three_constraints() {
        let pattern = Pattern::calculate(&word("crane"), &word("mambo"));
        let universe = Universe::new().learn(&pattern);

        // A present at slot 2 -> required, cleared from slot 2
        assert!(universe.contains(&word("mambo")));
        // Has forbidden letters
        assert!(!universe.contains(&word("crane")));
        // Missing required A
        assert!(!universe.contains(&word("limbo")));
        // A at slot 2 is excluded by the mask
        assert!(!universe.contains(&word("ghamo")));
    }

    #[test]
    fn target_always_survives() {
        let dict = dictionary();
        for target in &dict {
            let mut universe = Universe::new();
            for guess in &dict {
                let step = universe.update(guess, target, &dict, MaskPolicy::Filtered);
                assert!(step.members.contains(&target), "{target} lost after {guess}");
                universe = step.universe;
            }
        }
    }

    #[test]
    fn monotonic_across_a_game() {
        let dict = dictionary();
        let target = word("jumbo");
        let mut universe = Universe::new();
        let mut remaining = dict.len();

        for guess in ["crane", "zebra", "bombs", "limbo", "combo", "jumbo"] {
            let step = universe.update(&word(guess), &target, &dict, MaskPolicy::Filtered);
            let next = step.universe;

            assert!(next.mask().total_len() <= universe.mask().total_len());
            assert!(next.required().is_superset(universe.required()));
            assert!(next.forbidden().is_superset(universe.forbidden()));
            assert!(step.remaining() <= remaining);

            remaining = step.remaining();
            universe = next;
        }
        assert_eq!(remaining, 1);
    }

    #[test]
    fn policies_agree_on_membership() {
        let dict = dictionary();
        for target in &dict {
            let mut filtered = Universe::new();
            let mut condensed = Universe::new();
            for guess in ["slate", "amber", "combo", "mango"] {
                let guess = word(guess);
                let a = filtered.update(&guess, target, &dict, MaskPolicy::Filtered);
                let b = condensed.update(&guess, target, &dict, MaskPolicy::Condensed);

                assert_eq!(texts(&a.members), texts(&b.members));
                assert_eq!(a.pattern, b.pattern);
                for (tight, loose) in b.universe.mask().slots().iter().zip(a.universe.mask().slots()) {
                    assert!(tight.is_subset(*loose));
                }
                filtered = a.universe;
                condensed = b.universe;
            }
        }
    }

    #[test]
    fn condensed_mask_is_union_of_survivors() {
        let dict = dictionary();
        let target = word("mambo");
        let step = Universe::new().update(&word("bombs"), &target, &dict, MaskPolicy::Condensed);

        assert_eq!(step.universe.mask().to_string(), "[jlm][aiu][m][b][o]");

        let step = step
            .universe
            .update(&word("limbo"), &target, &dict, MaskPolicy::Condensed);
        assert_eq!(texts(&step.members), ["mambo", "jumbo"]);

        let step = step
            .universe
            .update(&word("jumbo"), &target, &dict, MaskPolicy::Condensed);
        assert_eq!(step.universe.mask().as_word(), Some(target));
    }

    #[test]
    fn members_keep_dictionary_order() {
        let dict = dictionary();
        let pattern = Pattern::calculate(&word("limbo"), &word("jumbo"));
        let universe = Universe::new().learn(&pattern);

        let members = universe.members(&dict);
        assert_eq!(members.len(), universe.count(&dict));
        let positions: Vec<usize> = members
            .iter()
            .map(|m| dict.iter().position(|w| w == *m).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }
}
