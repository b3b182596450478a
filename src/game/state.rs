//! Published game state
//!
//! Front ends only ever see these immutable values; the engine keeps its own
//! mutable state private.

/// Point-in-time view of a game, published after every intent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameUiState {
    pub current_scrambled_word: String,
    /// 1-based ordinal of the active round
    pub current_word_count: u32,
    pub max_rounds: u32,
    pub score: u32,
    pub is_guessed_word_wrong: bool,
    pub is_game_over: bool,
    pub user_guess: String,
}

impl GameUiState {
    #[inline]
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        !self.is_game_over
    }

    /// Rounds left after the active one
    #[must_use]
    pub const fn rounds_remaining(&self) -> u32 {
        self.max_rounds.saturating_sub(self.current_word_count)
    }
}

/// What an intent did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess buffer changed
    Updated,
    /// Correct guess; the next round has started
    Correct { points: u32 },
    /// Guess did not match the current word
    Wrong,
    /// Word skipped; the next round has started
    Skipped,
    /// The last round was decided
    GameOver { final_score: u32 },
    /// A fresh game was started
    NewGame,
    /// The intent does not apply in the current state (e.g. after game over)
    Ignored,
}

impl Outcome {
    /// Whether the intent changed the published state
    #[must_use]
    pub const fn changed_state(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_remaining_counts_down() {
        let mut state = GameUiState {
            current_word_count: 1,
            max_rounds: 10,
            ..GameUiState::default()
        };
        assert_eq!(state.rounds_remaining(), 9);

        state.current_word_count = 10;
        assert_eq!(state.rounds_remaining(), 0);
    }

    #[test]
    fn playing_until_game_over() {
        let mut state = GameUiState::default();
        assert!(state.is_playing());
        state.is_game_over = true;
        assert!(!state.is_playing());
    }

    #[test]
    fn only_ignored_leaves_state_unchanged() {
        assert!(!Outcome::Ignored.changed_state());
        assert!(Outcome::Wrong.changed_state());
        assert!(Outcome::Correct { points: 20 }.changed_state());
        assert!(Outcome::GameOver { final_score: 0 }.changed_state());
    }
}
