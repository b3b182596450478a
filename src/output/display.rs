//! Display functions for command results

use super::formatters::{score_bar, spaced_letters};
use crate::commands::{ScrambleResult, SimulationResult};
use colored::Colorize;
use std::io::{self, Write};

/// Print sample scrambles of a word
pub fn print_scramble_result(result: &ScrambleResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCRAMBLES OF".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, scrambled) in result.scrambles.iter().enumerate() {
        println!(
            "  {:>3}. {}",
            (i + 1).to_string().bright_black(),
            spaced_letters(scrambled).bright_white().bold()
        );
    }

    println!();
    println!("   Letters:     {}", result.letters);
    println!(
        "   Distinct:    {} of {} samples",
        result.distinct_scrambles,
        result.scrambles.len()
    );
    match result.possible_scrambles {
        Some(possible) => println!("   Possible:    {possible} arrangements"),
        None => println!("   Possible:    too many to count"),
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Rounds per game:  {}", result.max_rounds);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best score:       {}",
        format!("{}", result.best_score).green()
    );
    println!(
        "   Worst score:      {}",
        format!("{}", result.min_score).yellow()
    );
    println!(
        "   Perfect games:    {} (score {})",
        result.perfect_games, result.max_score
    );
    println!("   Wrong guesses:    {}", result.total_wrong_guesses);
    println!("   Words skipped:    {}", result.total_skips);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&score, &count) in &result.score_distribution {
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {score:>4}: {bar} {count:5} ({pct:5.1}%)");
    }

    println!();
    if result.violations.is_empty() {
        println!("{}", "✅ All game rules held".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} rule violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(10) {
            println!("   • {violation}");
        }
    }
}

/// Write the end-of-game summary shown by the line-oriented mode
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_final_score(out: &mut impl Write, score: u32, max_score: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "            🎉  C O N G R A T U L A T I O N S !  🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\n  You scored: {}  [{}]",
        score.to_string().bright_yellow().bold(),
        score_bar(score, max_score, 20).green()
    )?;
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())
}
