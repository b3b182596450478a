//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, WordList};
use std::fs;
use std::io;
use std::path::Path;

/// Load a vocabulary from a file, one word per line
///
/// Blank lines are ignored. Lines that are not valid words are skipped with a
/// warning; duplicates keep their first occurrence.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_unscramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words, skipping blanks and invalid entries
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    let words = content.lines().enumerate().filter_map(|(index, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        match Word::new(trimmed) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping line {}: '{trimmed}': {e}", index + 1);
                None
            }
        }
    });

    WordList::new(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_unscramble::wordlists::loader::words_from_slice;
/// use word_unscramble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
