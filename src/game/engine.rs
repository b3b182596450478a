//! Unscramble game engine
//!
//! Owns the game state, applies user intents and publishes a fresh
//! [`GameUiState`] after each one.

use super::config::GameConfig;
use super::error::GameError;
use super::state::{GameUiState, Outcome};
use crate::core::{Word, WordList, scramble};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand_pcg::Pcg32;
use rustc_hash::FxHashSet;

/// Handle returned by [`GameEngine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&GameUiState)>;

/// Mutable state of one session
struct GameState {
    used_words: FxHashSet<String>,
    current_word: Word,
    current_scrambled_word: String,
    current_word_count: u32,
    score: u32,
    is_guessed_word_wrong: bool,
    is_game_over: bool,
    user_guess: String,
}

impl GameState {
    fn initial(words: &WordList, rng: &mut Pcg32) -> Result<Self, GameError> {
        let mut used_words = FxHashSet::default();
        let (current_word, current_scrambled_word) = pick_and_scramble(words, &used_words, rng)?;
        used_words.insert(current_word.text().to_string());

        Ok(Self {
            used_words,
            current_word,
            current_scrambled_word,
            current_word_count: 1,
            score: 0,
            is_guessed_word_wrong: false,
            is_game_over: false,
            user_guess: String::new(),
        })
    }

    fn snapshot(&self, max_rounds: u32) -> GameUiState {
        GameUiState {
            current_scrambled_word: self.current_scrambled_word.clone(),
            current_word_count: self.current_word_count,
            max_rounds,
            score: self.score,
            is_guessed_word_wrong: self.is_guessed_word_wrong,
            is_game_over: self.is_game_over,
            user_guess: self.user_guess.clone(),
        }
    }
}

/// Pick a random unused word and scramble it
fn pick_and_scramble(
    words: &WordList,
    used_words: &FxHashSet<String>,
    rng: &mut Pcg32,
) -> Result<(Word, String), GameError> {
    let candidates: Vec<&Word> = words
        .iter()
        .filter(|word| !used_words.contains(word.text()))
        .collect();

    let word = (*candidates.choose(rng).ok_or(GameError::OutOfWords)?).clone();
    let scrambled = scramble(&word, rng);
    log::debug!(
        "picked '{word}' -> '{scrambled}' ({} candidates left)",
        candidates.len() - 1
    );

    Ok((word, scrambled))
}

/// Single-session unscramble game
///
/// Intents take `&mut self` and run to completion, so readers of
/// [`ui_state`](Self::ui_state) and subscribers never see a half-applied update.
///
/// # Examples
/// ```
/// use word_unscramble::core::WordList;
/// use word_unscramble::game::{GameConfig, GameEngine, Outcome};
///
/// let words = WordList::from_strs(&["intend", "account", "rounded"]).unwrap();
/// let config = GameConfig::default().with_max_rounds(3).with_seed(1);
/// let mut engine = GameEngine::new(words, config).unwrap();
///
/// let answer = engine.current_word().text().to_string();
/// engine.update_guess(answer);
/// assert_eq!(engine.submit_guess().unwrap(), Outcome::Correct { points: 20 });
/// assert_eq!(engine.ui_state().score, 20);
/// assert_eq!(engine.ui_state().current_word_count, 2);
/// ```
pub struct GameEngine {
    words: WordList,
    config: GameConfig,
    rng: Pcg32,
    state: GameState,
    snapshot: GameUiState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl GameEngine {
    /// Validate the configuration and start the first game
    ///
    /// # Errors
    /// Returns a `GameError` if the configuration does not fit the vocabulary.
    pub fn new(words: WordList, config: GameConfig) -> Result<Self, GameError> {
        config.validate(words.len())?;

        let mut rng = match config.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        let state = GameState::initial(&words, &mut rng)?;
        let snapshot = state.snapshot(config.max_rounds);

        log::info!(
            "new game: {} rounds, {} words in vocabulary",
            config.max_rounds,
            words.len()
        );

        Ok(Self {
            words,
            config,
            rng,
            state,
            snapshot,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Latest published snapshot
    #[inline]
    #[must_use]
    pub const fn ui_state(&self) -> &GameUiState {
        &self.snapshot
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The unscrambled answer for the active round
    ///
    /// Not part of the snapshot; used by automatic players and to reveal the
    /// answer once a game ends.
    #[inline]
    #[must_use]
    pub const fn current_word(&self) -> &Word {
        &self.state.current_word
    }

    /// Number of distinct words shown this session
    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.state.used_words.len()
    }

    /// Register a callback invoked with every newly published snapshot
    pub fn subscribe(&mut self, listener: impl FnMut(&GameUiState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let listener: Listener = Box::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a callback; returns `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Replace the in-progress guess
    pub fn update_guess(&mut self, text: impl Into<String>) -> Outcome {
        if self.state.is_game_over {
            return Outcome::Ignored;
        }

        self.state.user_guess = text.into();
        self.publish();
        Outcome::Updated
    }

    /// Check the in-progress guess against the current word
    ///
    /// # Errors
    /// Returns `GameError::OutOfWords` if the vocabulary is exhausted while
    /// starting the next round. State is left untouched in that case.
    pub fn submit_guess(&mut self) -> Result<Outcome, GameError> {
        if self.state.is_game_over {
            return Ok(Outcome::Ignored);
        }

        if !self
            .config
            .guess_policy
            .matches(&self.state.user_guess, &self.state.current_word)
        {
            log::debug!(
                "round {}: wrong guess '{}'",
                self.state.current_word_count,
                self.state.user_guess
            );
            self.state.is_guessed_word_wrong = true;
            self.publish();
            return Ok(Outcome::Wrong);
        }

        let next = self.prepare_next_round()?;
        let points = self.config.score_increase;
        self.state.score += points;
        self.state.is_guessed_word_wrong = false;
        log::debug!(
            "round {}: correct, score {}",
            self.state.current_word_count,
            self.state.score
        );

        Ok(self.advance(next, Outcome::Correct { points }))
    }

    /// Give up on the current word without scoring
    ///
    /// # Errors
    /// Same as [`submit_guess`](Self::submit_guess).
    pub fn skip_word(&mut self) -> Result<Outcome, GameError> {
        if self.state.is_game_over {
            return Ok(Outcome::Ignored);
        }

        let next = self.prepare_next_round()?;
        log::debug!(
            "round {}: skipped '{}'",
            self.state.current_word_count,
            self.state.current_word
        );
        self.state.is_guessed_word_wrong = false;

        Ok(self.advance(next, Outcome::Skipped))
    }

    /// Discard the current game and start a new one
    ///
    /// # Errors
    /// Returns `GameError::OutOfWords` if the vocabulary is empty.
    pub fn reset_game(&mut self) -> Result<Outcome, GameError> {
        self.state = GameState::initial(&self.words, &mut self.rng)?;
        log::info!("game reset");
        self.publish();
        Ok(Outcome::NewGame)
    }

    /// Pick the next word, or `None` if the active round is the last one
    fn prepare_next_round(&mut self) -> Result<Option<(Word, String)>, GameError> {
        if self.state.current_word_count >= self.config.max_rounds {
            return Ok(None);
        }
        pick_and_scramble(&self.words, &self.state.used_words, &mut self.rng).map(Some)
    }

    fn advance(&mut self, next: Option<(Word, String)>, outcome: Outcome) -> Outcome {
        self.state.user_guess.clear();

        let outcome = match next {
            None => {
                self.state.is_game_over = true;
                log::info!("game over, final score {}", self.state.score);
                Outcome::GameOver {
                    final_score: self.state.score,
                }
            }
            Some((word, scrambled)) => {
                self.state.current_word_count += 1;
                self.state.used_words.insert(word.text().to_string());
                self.state.current_word = word;
                self.state.current_scrambled_word = scrambled;
                outcome
            }
        };

        self.publish();
        outcome
    }

    fn publish(&mut self) {
        self.snapshot = self.state.snapshot(self.config.max_rounds);
        for (_, listener) in &mut self.listeners {
            listener(&self.snapshot);
        }
    }
}
