//! Solution, declared guess count and guesses as supplied by the user

use crate::core::{Alphabet, Code, CodeError};
use thiserror::Error;

/// Error raised while validating user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Number of guesses differs from the declared count
    #[error("The number of guesses provided ({provided}) does not match the guess count ({declared}).")]
    CountMismatch { provided: usize, declared: String },

    /// Declared count is not a non-negative integer
    #[error("The guess count ({0}) is not a valid number.")]
    InvalidCount(String),

    /// The solution contains a symbol outside the alphabet
    #[error("Invalid solution: {0}")]
    Solution(#[source] CodeError),

    /// A guess contains a symbol outside the alphabet
    #[error("Invalid guess #{index}: {source}")]
    Guess {
        index: usize,
        #[source]
        source: CodeError,
    },
}

impl InputError {
    /// Whether this error comes from the guess count check
    #[must_use]
    pub const fn is_count_error(&self) -> bool {
        matches!(self, Self::CountMismatch { .. } | Self::InvalidCount(_))
    }
}

/// Raw input for one scoring run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub solution: String,
    pub guess_count: String,
    pub guesses: Vec<String>,
}

impl Submission {
    #[must_use]
    pub fn new(
        solution: impl Into<String>,
        guess_count: impl Into<String>,
        guesses: Vec<String>,
    ) -> Self {
        Self {
            solution: solution.into(),
            guess_count: guess_count.into(),
            guesses,
        }
    }

    /// Check the declared guess count against the guesses supplied
    ///
    /// Only plain non-negative integers are accepted as a count; `"2.0"` or `"2e0"`
    /// are rejected as [`InputError::InvalidCount`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidCount`] if the count is not a number, or
    /// [`InputError::CountMismatch`] if it disagrees with the number of guesses.
    ///
    /// # Examples
    /// ```
    /// use mastermind_scorer::input::Submission;
    ///
    /// let ok = Submission::new("1234", "2", vec!["1532".into(), "8793".into()]);
    /// assert!(ok.validate_count().is_ok());
    ///
    /// let short = Submission::new("1234", "3", vec!["1532".into()]);
    /// assert!(short.validate_count().is_err());
    /// ```
    pub fn validate_count(&self) -> Result<(), InputError> {
        let declared: usize = self
            .guess_count
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidCount(self.guess_count.clone()))?;

        if declared != self.guesses.len() {
            return Err(InputError::CountMismatch {
                provided: self.guesses.len(),
                declared: self.guess_count.clone(),
            });
        }

        Ok(())
    }

    /// Validate the count and build the solution and guess codes
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for a bad count or any symbol outside `alphabet`.
    pub fn into_codes(self, alphabet: Alphabet) -> Result<(Code, Vec<Code>), InputError> {
        self.validate_count()?;

        let solution = Code::parse(self.solution, alphabet).map_err(InputError::Solution)?;
        let guesses = self
            .guesses
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                Code::parse(text, alphabet).map_err(|source| InputError::Guess { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((solution, guesses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(count: &str, guesses: &[&str]) -> Submission {
        Submission::new(
            "1234",
            count,
            guesses.iter().map(|&g| g.to_string()).collect(),
        )
    }

    #[test]
    fn matching_count_is_valid() {
        assert!(submission("2", &["1532", "8793"]).validate_count().is_ok());
        assert!(submission("0", &[]).validate_count().is_ok());
    }

    #[test]
    fn mismatched_count_is_rejected() {
        let err = submission("3", &["1532", "8793"]).validate_count().unwrap_err();
        assert_eq!(
            err,
            InputError::CountMismatch {
                provided: 2,
                declared: "3".into()
            }
        );
        assert!(err.is_count_error());
        assert_eq!(
            err.to_string(),
            "The number of guesses provided (2) does not match the guess count (3)."
        );
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = submission("two", &["1532", "8793"]).validate_count().unwrap_err();
        assert_eq!(err, InputError::InvalidCount("two".into()));
        assert!(err.is_count_error());
    }

    #[test]
    fn fractional_count_is_rejected() {
        let err = submission("2.0", &["1532", "8793"]).validate_count().unwrap_err();
        assert_eq!(err, InputError::InvalidCount("2.0".into()));
        assert!(submission("2e0", &["1532", "8793"]).validate_count().is_err());
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(submission("-1", &[]).validate_count().is_err());
    }

    #[test]
    fn into_codes_builds_codes() {
        let (solution, guesses) = submission("2", &["1532", "8793"])
            .into_codes(Alphabet::Digits)
            .unwrap();

        assert_eq!(solution.text(), "1234");
        assert_eq!(guesses, vec![Code::new("1532"), Code::new("8793")]);
    }

    #[test]
    fn into_codes_checks_count_first() {
        let err = submission("1", &["abcd", "8793"])
            .into_codes(Alphabet::Digits)
            .unwrap_err();
        assert!(err.is_count_error());
    }

    #[test]
    fn into_codes_reports_bad_guess_index() {
        let err = submission("2", &["1532", "87x3"])
            .into_codes(Alphabet::Digits)
            .unwrap_err();

        assert_eq!(
            err,
            InputError::Guess {
                index: 1,
                source: CodeError::InvalidSymbol {
                    symbol: 'x',
                    position: 2
                }
            }
        );
        assert!(!err.is_count_error());
    }

    #[test]
    fn into_codes_reports_bad_solution() {
        let err = Submission::new("12?4", "0", vec![])
            .into_codes(Alphabet::Digits)
            .unwrap_err();
        assert!(matches!(err, InputError::Solution(_)));
    }
}
