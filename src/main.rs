//! Mastermind Scorer - CLI
//!
//! Scores each guess against the solution and prints `exact-misplaced` pairs on one line.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use mastermind_scorer::{
    batch::{process_all, process_all_parallel},
    core::Alphabet,
    input::{Config, InputError, Submission},
    logging,
    output::{print_breakdown, render_line},
};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mastermind_scorer",
    about = "Score Mastermind guesses against a solution (exact-misplaced per guess)",
    version,
    author
)]
struct Cli {
    /// The secret code, e.g. 1234
    solution: String,

    /// Number of guesses that follow
    #[arg(allow_negative_numbers = true)]
    guess_count: String,

    /// Guesses to score, in order
    guesses: Vec<String>,

    /// Score guesses in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Symbols allowed in codes: 'any' (default) or 'digits'
    #[arg(short, long, default_value = "any")]
    alphabet: Alphabet,

    /// Print a per-guess breakdown to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn split(self) -> (Config, Submission) {
        let config = Config {
            parallel: self.parallel,
            alphabet: self.alphabet,
            verbose: self.verbose,
            quiet: self.quiet,
        };
        let submission = Submission::new(self.solution, self.guess_count, self.guesses);
        (config, submission)
    }
}

/// The two stderr lines printed before exiting on a bad guess count
fn count_warning(error: &InputError) -> [String; 2] {
    [error.to_string(), "Exiting.".to_string()]
}

fn main() -> Result<ExitCode> {
    let (config, submission) = Cli::parse().split();
    logging::init(&config);
    debug!(?config, "starting");

    // Count problems are reported as a warning, not an error chain
    if let Err(e) = submission.validate_count() {
        debug!(error = %e, "guess count check failed");
        for line in count_warning(&e) {
            eprintln!("{}", line.yellow());
        }
        return Ok(ExitCode::FAILURE);
    }

    let (solution, guesses) = submission
        .into_codes(config.alphabet)
        .context("Invalid input")?;

    let scores = if config.parallel {
        process_all_parallel(&solution, &guesses)
    } else {
        process_all(&solution, &guesses)
    }
    .context("Failed to score guesses")?;

    if config.verbose {
        print_breakdown(&solution, &guesses, &scores);
    }

    println!("{}", render_line(&scores));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mastermind_scorer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn positional_arguments() {
        let cli = parse(&["1234", "2", "1532", "8793"]);
        assert_eq!(cli.solution, "1234");
        assert_eq!(cli.guess_count, "2");
        assert_eq!(cli.guesses, vec!["1532", "8793"]);
        assert!(!cli.verbose && !cli.parallel && !cli.quiet);
        assert_eq!(cli.alphabet, Alphabet::Any);
    }

    #[test]
    fn flags_after_guesses_are_parsed() {
        let cli = parse(&["1234", "2", "1532", "8793", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.guesses.len(), 2);

        let cli = parse(&["1234", "2", "1532", "8793", "--parallel", "--alphabet", "digits"]);
        assert!(cli.parallel);
        assert_eq!(cli.alphabet, Alphabet::Digits);
        assert_eq!(cli.guesses.len(), 2);
    }

    #[test]
    fn flags_before_positionals_are_parsed() {
        let cli = parse(&["-q", "-p", "1234", "1", "1532"]);
        assert!(cli.quiet);
        assert!(cli.parallel);
        assert_eq!(cli.guesses, vec!["1532"]);
    }

    #[test]
    fn negative_count_reaches_validation() {
        let (_, submission) = parse(&["1234", "-1"]).split();
        assert_eq!(submission.guess_count, "-1");
        assert!(submission.validate_count().is_err());
    }

    #[test]
    fn count_warning_is_two_lines() {
        let (_, submission) = parse(&["1234", "2", "1532", "8793", "4321"]).split();
        let err = submission.validate_count().unwrap_err();

        assert_eq!(
            count_warning(&err),
            [
                "The number of guesses provided (3) does not match the guess count (2)."
                    .to_string(),
                "Exiting.".to_string()
            ]
        );
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["mastermind_scorer", "1234", "0", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn split_builds_config_and_submission() {
        let (config, submission) = parse(&["1234", "1", "1532", "-p", "-a", "digits"]).split();
        assert!(config.parallel);
        assert_eq!(config.alphabet, Alphabet::Digits);
        assert_eq!(submission.guesses, vec!["1532".to_string()]);
        assert!(submission.validate_count().is_ok());
    }
}
