//! Error types for code construction and scoring

use thiserror::Error;

/// Error raised when a string cannot become a [`Code`](super::Code)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// A symbol outside the configured alphabet
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Error raised while scoring guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Guess and solution have different lengths
    #[error("guess has {guess} symbols but the solution has {solution}")]
    LengthMismatch { guess: usize, solution: usize },

    /// A guess inside a batch failed to score
    #[error("guess #{index} could not be scored: {source}")]
    Guess {
        index: usize,
        #[source]
        source: Box<ScoreError>,
    },
}

impl ScoreError {
    /// Attach the position of the failing guess within its batch
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        Self::Guess {
            index,
            source: Box::new(self),
        }
    }
}
