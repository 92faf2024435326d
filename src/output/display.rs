//! Display functions for verbose output

use super::formatters::score_to_pegs;
use crate::core::{Code, Score};
use colored::Colorize;

/// Print a per-guess breakdown to stderr
///
/// Stdout is reserved for the single result line.
pub fn print_breakdown(solution: &Code, guesses: &[Code], scores: &[Score]) {
    eprintln!("\n{}", "═".repeat(50).cyan());
    eprintln!(
        " {} {} ",
        "SOLUTION:".bright_cyan().bold(),
        solution.text().bright_yellow().bold()
    );
    eprintln!("{}", "═".repeat(50).cyan());

    for (i, (guess, &score)) in guesses.iter().zip(scores).enumerate() {
        let pegs = score_to_pegs(score, solution.len());
        let marker = if score.is_solved(solution.len()) {
            "✓ solved".green().bold().to_string()
        } else {
            String::new()
        };

        eprintln!(
            "  {} {}  {}  exact {} misplaced {} {}",
            format!("{:>3}.", i + 1).bright_black(),
            guess.text().bright_white().bold(),
            pegs,
            score.exact().to_string().green(),
            score.misplaced().to_string().yellow(),
            marker
        );
    }

    let solved = scores
        .iter()
        .filter(|s| s.is_solved(solution.len()))
        .count();
    eprintln!(
        "\n  {} guesses scored, {} solved\n",
        scores.len().to_string().bright_cyan(),
        solved.to_string().bright_green()
    );
}
