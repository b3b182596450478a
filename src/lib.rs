//! Word Unscramble
//!
//! A word-unscramble game: guess the word behind a scrambled arrangement of
//! its letters, score points for each correct answer, and finish after a
//! fixed number of rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use word_unscramble::game::{GameConfig, GameEngine};
//! use word_unscramble::wordlists::default_word_list;
//!
//! let mut engine = GameEngine::new(default_word_list(), GameConfig::default()).unwrap();
//! println!("Unscramble: {}", engine.ui_state().current_scrambled_word);
//!
//! engine.update_guess("guess");
//! engine.submit_guess().unwrap();
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
