//! Core domain types for the unscramble game
//!
//! Words, the vocabulary, and the scrambler. Everything here is pure and
//! takes its randomness from the caller.

mod scramble;
mod word;
mod word_list;

pub use scramble::scramble;
pub use word::{MIN_WORD_LEN, Word, WordError};
pub use word_list::WordList;
