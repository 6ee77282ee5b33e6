//! One game against a fixed target

use crate::core::{Pattern, Word, WordError};
use crate::universe::{MaskPolicy, Universe};
use log::{debug, warn};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<'a> {
    /// Two or more candidates remain
    InProgress,
    /// Exactly one candidate remains
    Narrowed(&'a Word),
    /// No candidate is consistent with the feedback
    Inconsistent,
}

/// A processed guess
#[derive(Debug, Clone)]
pub struct Step {
    pub guess: Word,
    pub pattern: Pattern,
    pub universe: Universe,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Simulates a game, keeping the universe of words consistent with all feedback
///
/// The dictionary is borrowed for the lifetime of the game and never modified.
pub struct GameSimulator<'a> {
    target: Word,
    dictionary: &'a [Word],
    policy: MaskPolicy,
    universe: Universe,
    members: Vec<&'a Word>,
    history: Vec<Step>,
}

impl<'a> GameSimulator<'a> {
    /// Start a game with nothing learned yet
    ///
    /// # Examples
    /// ```
    /// use wordle_universe::core::Word;
    /// use wordle_universe::game::{GameSimulator, GameStatus};
    ///
    /// let dictionary: Vec<Word> = ["mambo", "limbo", "jumbo"]
    ///     .iter()
    ///     .map(|s| Word::new(s).unwrap())
    ///     .collect();
    /// let mut game = GameSimulator::new(dictionary[0], &dictionary);
    ///
    /// let step = game.process("limbo").unwrap();
    /// assert_eq!(step.pattern.to_string(), "L:B I:B M:G B:G O:G");
    /// assert_eq!(game.remaining(), 2);
    ///
    /// assert!(game.process("bad!!").is_err());
    /// game.process("jumbo").unwrap();
    /// assert_eq!(game.status(), GameStatus::Narrowed(&dictionary[0]));
    /// ```
    #[must_use]
    pub fn new(target: Word, dictionary: &'a [Word]) -> Self {
        if !dictionary.contains(&target) {
            warn!("target {target} is not in the dictionary; feedback will eliminate every word");
        }

        Self {
            target,
            dictionary,
            policy: MaskPolicy::default(),
            universe: Universe::new(),
            members: dictionary.iter().collect(),
            history: Vec::new(),
        }
    }

    /// Choose how the positional mask is carried between guesses
    #[must_use]
    pub const fn with_policy(mut self, policy: MaskPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Process one line of input as a guess
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `WordError` if the line is not a 5-letter word. The game state
    /// is left exactly as it was.
    pub fn process(&mut self, line: &str) -> Result<&Step, WordError> {
        let guess = Word::new(line.trim())?;
        Ok(self.guess(guess))
    }

    /// Fold an already-encoded guess into the game
    pub fn guess(&mut self, guess: Word) -> &Step {
        let candidates_before = self.members.len();
        let narrowing = self
            .universe
            .update(&guess, &self.target, self.dictionary, self.policy);

        self.universe = narrowing.universe;
        self.members = narrowing.members;

        if self.members.is_empty() {
            warn!("no candidates remain after {guess}; the feedback is contradictory");
        }
        debug!(
            "turn {}: {candidates_before} -> {} candidates",
            self.history.len() + 1,
            self.members.len()
        );

        self.history.push(Step {
            guess,
            pattern: narrowing.pattern,
            universe: self.universe,
            candidates_before,
            candidates_after: self.members.len(),
        });
        &self.history[self.history.len() - 1]
    }

    #[must_use]
    pub fn status(&self) -> GameStatus<'a> {
        match self.members.as_slice() {
            [] => GameStatus::Inconsistent,
            [only] => GameStatus::Narrowed(only),
            _ => GameStatus::InProgress,
        }
    }

    /// True once fewer than two candidates remain
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.members.len() < 2
    }

    /// Number of dictionary words still consistent with the feedback
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.members.len()
    }

    /// The words still consistent with the feedback, in dictionary order
    #[must_use]
    pub fn remaining_words(&self) -> &[&'a Word] {
        &self.members
    }

    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    #[must_use]
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn policy(&self) -> MaskPolicy {
        self.policy
    }
}
