//! Unscramble game state machine
//!
//! [`GameEngine`] owns one session and exposes four intents. Front ends read
//! [`GameUiState`] snapshots and never mutate game state directly.

mod config;
mod engine;
mod error;
mod state;

pub use config::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, GuessPolicy};
pub use engine::{GameEngine, SubscriptionId};
pub use error::GameError;
pub use state::{GameUiState, Outcome};
