//! Word Unscramble - CLI
//!
//! Unscramble game with TUI and CLI modes, plus tools to inspect scrambles
//! and simulate games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use word_unscramble::{
    commands::{SimulationConfig, run_simple, run_simulation, scramble_word},
    core::WordList,
    game::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, GameEngine, GuessPolicy},
    output::{print_scramble_result, print_simulation_result},
    wordlists::{default_word_list, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble the word using all the letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (embedded vocabulary) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Rounds per game
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: u32,

    /// Points awarded for each correct guess
    #[arg(short = 'p', long, global = true, default_value_t = DEFAULT_SCORE_INCREASE)]
    points: u32,

    /// Accept guesses regardless of letter case
    #[arg(long, global = true)]
    ignore_case: bool,

    /// Seed for word picking and scrambling (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Show sample scrambles of a word
    Scramble {
        /// The word to scramble
        word: String,

        /// Number of scrambles to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Play many games with an automatic player and check the rules
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Probability that the automatic player knows each word
        #[arg(short = 'a', long, default_value = "0.7")]
        accuracy: f64,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let guess_policy = if self.ignore_case {
            GuessPolicy::IgnoreCase
        } else {
            GuessPolicy::Exact
        };

        let config = GameConfig::default()
            .with_max_rounds(self.rounds)
            .with_score_increase(self.points)
            .with_guess_policy(guess_policy);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Load the vocabulary based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "default" => Ok(default_word_list()),
        path => load_from_file(path).with_context(|| format!("failed to read word list '{path}'")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let words = load_wordlist(&cli.wordlist)?;
    let config = cli.game_config();
    log::debug!("vocabulary: {} words, config: {config:?}", words.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, config),
        Commands::Simple => run_simple_command(words, config),
        Commands::Scramble { word, count } => run_scramble_command(&word, count, config.seed),
        Commands::Simulate { games, accuracy } => {
            run_simulate_command(&words, &config, games, accuracy)
        }
    }
}

fn run_play_command(words: WordList, config: GameConfig) -> Result<()> {
    use word_unscramble::interactive::{App, run_tui};

    let engine = GameEngine::new(words, config)?;
    run_tui(App::new(engine))
}

fn run_simple_command(words: WordList, config: GameConfig) -> Result<()> {
    let mut engine = GameEngine::new(words, config)?;
    run_simple(&mut engine)
}

fn run_scramble_command(word: &str, count: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let result = scramble_word(word, count, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    print_scramble_result(&result);
    Ok(())
}

fn run_simulate_command(
    words: &WordList,
    config: &GameConfig,
    games: usize,
    accuracy: f64,
) -> Result<()> {
    println!(
        "Simulating {games} games of {} rounds ({} words, accuracy {accuracy:.2})...",
        config.max_rounds,
        words.len()
    );

    let simulation = SimulationConfig {
        games,
        accuracy,
        seed: config.seed.unwrap_or_else(rand::random),
        show_progress: true,
    };
    let result = run_simulation(words, config, &simulation)?;
    print_simulation_result(&result);

    if result.violations.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} rule violations detected", result.violations.len())
    }
}
