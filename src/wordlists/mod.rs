//! Word lists for the unscramble game
//!
//! Provides the default vocabulary compiled into the binary and loaders for
//! custom word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::WordList;

/// The embedded vocabulary as a validated [`WordList`]
///
/// # Examples
/// ```
/// use word_unscramble::wordlists::default_word_list;
///
/// let words = default_word_list();
/// assert!(words.len() >= 10);
/// ```
#[must_use]
pub fn default_word_list() -> WordList {
    WordList::new(loader::words_from_slice(WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::DEFAULT_MAX_ROUNDS;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not scrambleable");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        assert_eq!(default_word_list().len(), WORDS_COUNT);
    }

    #[test]
    fn vocabulary_covers_default_rounds() {
        assert!(default_word_list().len() >= DEFAULT_MAX_ROUNDS as usize);
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 178, "Expected 178 embedded words");
    }
}
