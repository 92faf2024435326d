//! Run configuration resolved from the command line

use crate::core::Alphabet;

/// Options that shape a scoring run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Score guesses on the rayon thread pool
    pub parallel: bool,
    /// Symbols accepted in the solution and guesses
    pub alphabet: Alphabet,
    /// Print a per-guess breakdown and debug logs
    pub verbose: bool,
    /// Only log errors
    pub quiet: bool,
}

impl Config {
    /// Log filter directive for this crate
    ///
    /// `quiet` wins over `verbose` when both are set.
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        if self.quiet {
            "mastermind_scorer=error"
        } else if self.verbose {
            "mastermind_scorer=debug"
        } else {
            "mastermind_scorer=warn"
        }
    }
}
