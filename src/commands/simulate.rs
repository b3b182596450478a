//! Simulation command
//!
//! Plays many sessions with an automatic player and checks the game rules
//! along the way.

use crate::core::WordList;
use crate::game::{GameConfig, GameEngine, Outcome};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Probability that the automatic player knows the answer
    pub accuracy: f64,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            accuracy: 0.7,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Report for a single simulated session
#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub score: u32,
    pub correct: u32,
    pub skipped: u32,
    pub wrong_guesses: u32,
    pub violations: Vec<String>,
}

/// Aggregate statistics over all sessions
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub max_rounds: u32,
    pub max_score: u32,
    pub average_score: f64,
    pub min_score: u32,
    pub best_score: u32,
    pub perfect_games: usize,
    pub total_wrong_guesses: u64,
    pub total_skips: u64,
    pub score_distribution: BTreeMap<u32, usize>,
    pub violations: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `config.games` sessions in parallel
///
/// # Errors
///
/// Returns an error if `accuracy` is outside `0.0..=1.0`, the game
/// configuration does not fit the vocabulary, or a session fails to advance.
pub fn run_simulation(
    words: &WordList,
    game_config: &GameConfig,
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    if !(0.0..=1.0).contains(&config.accuracy) {
        bail!("accuracy must be between 0 and 1, got {}", config.accuracy);
    }
    game_config.validate(words.len())?;

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Playing");

    let start = Instant::now();

    let reports = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let session_seed = config.seed.wrapping_add(index as u64);
            let report = play_session(words, game_config, config.accuracy, session_seed);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(reports, game_config, duration))
}

/// Play one session to game over with an automatic player
///
/// Each round the player answers correctly with probability `accuracy`;
/// otherwise it submits the scrambled form (always wrong) and skips.
///
/// # Errors
///
/// Returns an error if the engine cannot be created or runs out of words.
pub fn play_session(
    words: &WordList,
    game_config: &GameConfig,
    accuracy: f64,
    seed: u64,
) -> Result<SessionReport> {
    let config = game_config.clone().with_seed(seed);
    let mut engine = GameEngine::new(words.clone(), config)?;
    let mut player = Pcg32::seed_from_u64(seed.rotate_left(32));
    let mut report = SessionReport::default();
    let mut seen = FxHashSet::default();

    loop {
        let state = engine.ui_state().clone();
        let word = engine.current_word().clone();

        if !seen.insert(word.text().to_string()) {
            report
                .violations
                .push(format!("seed {seed}: '{word}' repeated in one session"));
        }
        if state.current_scrambled_word == word.text() {
            report
                .violations
                .push(format!("seed {seed}: '{word}' shown unscrambled"));
        }
        if !word.is_permutation_of(&state.current_scrambled_word) {
            report.violations.push(format!(
                "seed {seed}: '{}' is not a scramble of '{word}'",
                state.current_scrambled_word
            ));
        }

        let outcome = if player.random_bool(accuracy) {
            if !engine.update_guess(word.text()).changed_state() {
                report
                    .violations
                    .push(format!("seed {seed}: guess ignored while playing"));
            }
            let outcome = engine.submit_guess()?;
            report.correct += 1;
            let expected = state.score.checked_add(game_config.score_increase);
            if expected != Some(engine.ui_state().score) {
                report.violations.push(format!(
                    "seed {seed}: score went {} -> {} on a correct guess",
                    state.score,
                    engine.ui_state().score
                ));
            }
            outcome
        } else {
            engine.update_guess(state.current_scrambled_word.as_str());
            if engine.submit_guess()? != Outcome::Wrong {
                report
                    .violations
                    .push(format!("seed {seed}: scrambled form accepted for '{word}'"));
            }
            report.wrong_guesses += 1;
            report.skipped += 1;
            engine.skip_word()?
        };

        if let Outcome::GameOver { final_score } = outcome {
            report.score = final_score;
            break;
        }
    }

    let end = engine.ui_state();
    if end.current_word_count != game_config.max_rounds {
        report.violations.push(format!(
            "seed {seed}: game ended on round {} of {}",
            end.current_word_count, game_config.max_rounds
        ));
    }
    if engine.used_word_count() != game_config.max_rounds as usize {
        report.violations.push(format!(
            "seed {seed}: {} words used for {} rounds",
            engine.used_word_count(),
            game_config.max_rounds
        ));
    }

    Ok(report)
}

fn summarize(
    reports: Vec<SessionReport>,
    game_config: &GameConfig,
    duration: Duration,
) -> SimulationResult {
    let games = reports.len();
    let max_score = game_config.max_score();
    let mut score_distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut total_score: u64 = 0;
    let mut total_wrong_guesses: u64 = 0;
    let mut total_skips: u64 = 0;
    let mut violations = Vec::new();

    for report in reports {
        *score_distribution.entry(report.score).or_insert(0) += 1;
        total_score += u64::from(report.score);
        total_wrong_guesses += u64::from(report.wrong_guesses);
        total_skips += u64::from(report.skipped);
        violations.extend(report.violations);
    }

    let average_score = if games > 0 {
        total_score as f64 / games as f64
    } else {
        0.0
    };

    SimulationResult {
        games,
        max_rounds: game_config.max_rounds,
        max_score,
        average_score,
        min_score: score_distribution.keys().next().copied().unwrap_or(0),
        best_score: score_distribution.keys().next_back().copied().unwrap_or(0),
        perfect_games: score_distribution.get(&max_score).copied().unwrap_or(0),
        total_wrong_guesses,
        total_skips,
        score_distribution,
        violations,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::default_word_list;

    fn quiet(games: usize, accuracy: f64) -> SimulationConfig {
        SimulationConfig {
            games,
            accuracy,
            seed: 42,
            show_progress: false,
        }
    }

    #[test]
    fn perfect_player_always_maxes_out() {
        let words = default_word_list();
        let result = run_simulation(&words, &GameConfig::default(), &quiet(50, 1.0)).unwrap();

        assert_eq!(result.games, 50);
        assert_eq!(result.perfect_games, 50);
        assert_eq!(result.best_score, 200);
        assert_eq!(result.min_score, 200);
        assert!((result.average_score - 200.0).abs() < f64::EPSILON);
        assert_eq!(result.total_skips, 0);
        assert!(result.violations.is_empty(), "{:?}", result.violations);
    }

    #[test]
    fn hopeless_player_scores_zero() {
        let words = default_word_list();
        let result = run_simulation(&words, &GameConfig::default(), &quiet(20, 0.0)).unwrap();

        assert_eq!(result.best_score, 0);
        assert_eq!(result.total_skips, 20 * 10);
        assert_eq!(result.total_wrong_guesses, 20 * 10);
        assert!(result.violations.is_empty(), "{:?}", result.violations);
    }

    #[test]
    fn distribution_sums_to_games() {
        let words = default_word_list();
        let result = run_simulation(&words, &GameConfig::default(), &quiet(100, 0.5)).unwrap();

        let sum: usize = result.score_distribution.values().sum();
        assert_eq!(sum, result.games);
        assert!(result.average_score >= f64::from(result.min_score));
        assert!(result.average_score <= f64::from(result.best_score));
        for &score in result.score_distribution.keys() {
            assert_eq!(score % 20, 0);
            assert!(score <= 200);
        }
        assert!(result.violations.is_empty(), "{:?}", result.violations);
    }

    #[test]
    fn tight_vocabulary_has_no_repeats() {
        let words = WordList::from_strs(&["intend", "account", "rounded"]).unwrap();
        let config = GameConfig::default().with_max_rounds(3);
        let result = run_simulation(&words, &config, &quiet(200, 0.5)).unwrap();

        assert_eq!(result.max_score, 60);
        assert!(result.violations.is_empty(), "{:?}", result.violations);
    }

    #[test]
    fn invalid_accuracy_rejected() {
        let words = default_word_list();
        assert!(run_simulation(&words, &GameConfig::default(), &quiet(1, 1.5)).is_err());
        assert!(run_simulation(&words, &GameConfig::default(), &quiet(1, -0.1)).is_err());
    }

    #[test]
    fn oversized_rounds_rejected() {
        let words = WordList::from_strs(&["intend", "account"]).unwrap();
        let config = GameConfig::default().with_max_rounds(3);
        assert!(run_simulation(&words, &config, &quiet(1, 0.5)).is_err());
    }

    #[test]
    fn overflowing_points_rejected() {
        let words = WordList::from_strs(&["intend", "account", "rounded"]).unwrap();
        let game_config = GameConfig::default()
            .with_max_rounds(3)
            .with_score_increase(u32::MAX);

        assert!(play_session(&words, &game_config, 1.0, 1).is_err());
        assert!(run_simulation(&words, &game_config, &quiet(4, 1.0)).is_err());
    }

    #[test]
    fn largest_points_for_single_round() {
        let words = WordList::from_strs(&["intend", "account", "rounded"]).unwrap();
        let game_config = GameConfig::default()
            .with_max_rounds(1)
            .with_score_increase(u32::MAX);

        let report = play_session(&words, &game_config, 1.0, 1).unwrap();
        assert_eq!(report.score, u32::MAX);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn zero_games() {
        let words = default_word_list();
        let result = run_simulation(&words, &GameConfig::default(), &quiet(0, 0.5)).unwrap();
        assert_eq!(result.games, 0);
        assert_eq!(result.perfect_games, 0);
        assert!(result.average_score.abs() < f64::EPSILON);
    }

    #[test]
    fn session_is_reproducible() {
        let words = default_word_list();
        let config = GameConfig::default();
        let a = play_session(&words, &config, 0.5, 9).unwrap();
        let b = play_session(&words, &config, 0.5, 9).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.correct, b.correct);
        assert_eq!(a.skipped, b.skipped);
        assert_eq!(a.correct + a.skipped, 10);
    }
}
