//! Game configuration

use super::error::GameError;
use crate::core::Word;

/// Rounds played per game unless configured otherwise
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Points awarded for each correct guess unless configured otherwise
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// How a submitted guess is compared with the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPolicy {
    /// Byte-for-byte equality with the lowercase word
    #[default]
    Exact,
    /// ASCII case-insensitive equality
    IgnoreCase,
}

impl GuessPolicy {
    /// Check a guess against the word
    ///
    /// # Examples
    /// ```
    /// use word_unscramble::core::Word;
    /// use word_unscramble::game::GuessPolicy;
    ///
    /// let word = Word::new("intend").unwrap();
    /// assert!(GuessPolicy::Exact.matches("intend", &word));
    /// assert!(!GuessPolicy::Exact.matches("Intend", &word));
    /// assert!(GuessPolicy::IgnoreCase.matches("INTEND", &word));
    /// ```
    #[must_use]
    pub fn matches(self, guess: &str, word: &Word) -> bool {
        match self {
            Self::Exact => guess == word.text(),
            Self::IgnoreCase => guess.eq_ignore_ascii_case(word.text()),
        }
    }
}

/// Tunable game rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: u32,
    pub score_increase: u32,
    pub guess_policy: GuessPolicy,
    /// Seed for word picking and scrambling; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increase: DEFAULT_SCORE_INCREASE,
            guess_policy: GuessPolicy::Exact,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn with_score_increase(mut self, score_increase: u32) -> Self {
        self.score_increase = score_increase;
        self
    }

    #[must_use]
    pub const fn with_guess_policy(mut self, guess_policy: GuessPolicy) -> Self {
        self.guess_policy = guess_policy;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Highest score reachable in one game
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_rounds.saturating_mul(self.score_increase)
    }

    /// Check the rules against a vocabulary of `vocabulary_len` words
    ///
    /// # Errors
    /// - `InvalidConfig` if `max_rounds` is zero or the highest score overflows `u32`
    /// - `VocabularyTooSmall` if there are fewer words than rounds
    pub fn validate(&self, vocabulary_len: usize) -> Result<(), GameError> {
        if self.max_rounds == 0 {
            return Err(GameError::InvalidConfig(
                "max_rounds must be at least 1".to_string(),
            ));
        }

        if self.max_rounds.checked_mul(self.score_increase).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "{} rounds of {} points overflows the score",
                self.max_rounds, self.score_increase
            )));
        }

        if vocabulary_len < self.max_rounds as usize {
            return Err(GameError::VocabularyTooSmall {
                words: vocabulary_len,
                rounds: self.max_rounds,
            });
        }

        Ok(())
    }
}
