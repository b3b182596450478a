//! Game engine errors

use thiserror::Error;

/// Errors raised while configuring or advancing a game
///
/// Wrong guesses are not errors; they are reported through
/// [`GameUiState::is_guessed_word_wrong`](super::GameUiState::is_guessed_word_wrong).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No unused words remain in the vocabulary")]
    OutOfWords,
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("Vocabulary has {words} words but a game needs {rounds} rounds")]
    VocabularyTooSmall { words: usize, rounds: u32 },
}
