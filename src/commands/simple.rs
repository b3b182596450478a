//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::game::{GameEngine, Outcome};
use crate::output::display::write_final_score;
use crate::output::formatters::{round_badge, spaced_letters};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// engine runs out of words.
pub fn run_simple(engine: &mut GameEngine) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(engine, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the simple mode against arbitrary input and output streams
///
/// Each input line is a guess with surrounding whitespace removed. Lines
/// starting with `:` are commands. End of input quits.
///
/// # Errors
///
/// Returns an error on I/O failure or if the engine runs out of words.
pub fn run_simple_with<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Unscramble - Simple Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Unscramble the word using all the letters.")?;
    writeln!(out, "Commands: ':skip' to skip, ':reset' for new game, ':quit' to exit\n")?;

    loop {
        let state = engine.ui_state().clone();

        if !state.is_playing() {
            write_final_score(out, state.score, engine.config().max_score())?;

            let Some(answer) = read_line(input, out, "Play again? (yes/no)")? else {
                return farewell(out);
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => {
                    engine.reset_game()?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => return farewell(out),
            }
        }

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "{}   score: {}",
            round_badge(state.current_word_count, state.max_rounds),
            state.score
        )?;
        writeln!(
            out,
            "\n    {}\n",
            spaced_letters(&state.current_scrambled_word)
                .bright_yellow()
                .bold()
        )?;

        let prompt = if state.is_guessed_word_wrong {
            "Wrong guess! Try again"
        } else {
            "Enter your word"
        };
        let Some(line) = read_line(input, out, prompt)? else {
            return farewell(out);
        };

        match line.as_str() {
            ":quit" | ":q" | ":exit" => return farewell(out),
            ":skip" | ":s" => {
                let word = engine.current_word().text().to_string();
                engine.skip_word()?;
                writeln!(
                    out,
                    "⏭  Skipped. The word was {}\n",
                    word.to_uppercase().cyan()
                )?;
            }
            ":reset" | ":new" | ":n" => {
                engine.reset_game()?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            guess => {
                engine.update_guess(guess);
                match engine.submit_guess()? {
                    Outcome::Correct { .. } | Outcome::GameOver { .. } => {
                        writeln!(out, "{}\n", "✓ Correct!".green().bold())?;
                    }
                    Outcome::Wrong => {
                        writeln!(out, "{}\n", "❌ Wrong guess!".red().bold())?;
                    }
                    _ => {}
                }
            }
        }
    }
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
