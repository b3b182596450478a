//! Immutable game vocabulary

use super::word::{Word, WordError};
use rustc_hash::FxHashSet;

/// Ordered, duplicate-free sequence of candidate words
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a vocabulary from validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();
        Self { words }
    }

    /// Build a vocabulary from raw strings, rejecting the first invalid entry
    ///
    /// # Errors
    /// Returns the `WordError` of the first string that is not a valid [`Word`].
    ///
    /// # Examples
    /// ```
    /// use word_unscramble::core::WordList;
    ///
    /// let list = WordList::from_strs(&["intend", "account", "rounded"]).unwrap();
    /// assert_eq!(list.len(), 3);
    /// assert!(WordList::from_strs(&["intend", "a"]).is_err());
    /// ```
    pub fn from_strs(strs: &[&str]) -> Result<Self, WordError> {
        let words = strs
            .iter()
            .map(|&s| Word::new(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
