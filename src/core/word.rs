//! Vocabulary word representation
//!
//! A Word is a lowercase ASCII word that can be scrambled into something other than itself.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Minimum length of a scrambleable word
pub const MIN_WORD_LEN: usize = 2;

/// A validated vocabulary word
///
/// Guaranteed to have at least two distinct letters, so there is always a
/// permutation that differs from the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least 2 letters, got {0}")]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
    #[error("Word '{0}' has no arrangement different from itself")]
    NoDistinctPermutation(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Only ASCII letters are accepted; they are lowercased after validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below [`MIN_WORD_LEN`]
    /// - Contains anything other than ASCII letters
    /// - Every letter is the same (e.g. `"aa"`)
    ///
    /// # Examples
    /// ```
    /// use word_unscramble::core::Word;
    ///
    /// let word = Word::new("Intend").unwrap();
    /// assert_eq!(word.text(), "intend");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("x-ray").is_err());
    /// assert!(Word::new("zzz").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }
        let text = text.to_ascii_lowercase();

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        let first = text.as_bytes()[0];
        if text.bytes().all(|b| b == first) {
            return Err(WordError::NoDistinctPermutation(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.len()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<char, usize> {
        count_chars(&self.text)
    }

    /// Check whether `candidate` uses exactly the same letters as this word
    #[must_use]
    pub fn is_permutation_of(&self, candidate: &str) -> bool {
        candidate.len() == self.text.len() && count_chars(candidate) == self.char_counts()
    }
}

fn count_chars(text: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
