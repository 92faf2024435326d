//! Mastermind feedback calculation and representation
//!
//! A score is the pair of peg counts returned for a guess:
//! - exact: right symbol in the right position
//! - misplaced: right symbol in the wrong position
//!
//! Rendered on the wire as `"{exact}-{misplaced}"`, e.g. `"2-1"`.

use super::{Code, ScoreError};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact: usize,
    misplaced: usize,
}

impl Score {
    /// No matches at all
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// Symbols in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Symbols present in the solution but in another position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> usize {
        self.misplaced
    }

    /// Total matched symbols (never exceeds the code length)
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.misplaced
    }

    /// Check if every position of a code of `len` symbols matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, len: usize) -> bool {
        self.exact == len && self.misplaced == 0
    }

    /// Calculate the score when `guess` is played against `solution`
    ///
    /// Each solution symbol is consumed at most once, so duplicated symbols in the
    /// guess are not double-counted.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches; pool the unmatched solution symbols
    /// 2. Second pass: each unmatched guess symbol takes one occurrence from the pool
    ///
    /// # Errors
    /// Returns [`ScoreError::LengthMismatch`] if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_scorer::core::{Code, Score};
    ///
    /// let score = Score::calculate(&Code::new("1532"), &Code::new("1234")).unwrap();
    ///
    /// // 1 and 3 are in place, 2 is present elsewhere
    /// assert_eq!(score, Score::new(2, 1));
    /// assert_eq!(score.to_string(), "2-1");
    /// ```
    pub fn calculate(guess: &Code, solution: &Code) -> Result<Self, ScoreError> {
        if guess.len() != solution.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                solution: solution.len(),
            });
        }

        let mut exact = 0;
        let mut unmatched_guess = Vec::with_capacity(guess.len());
        let mut solution_available: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: exact position matches
        for (&g, &s) in guess.symbols().iter().zip(solution.symbols()) {
            if g == s {
                exact += 1;
            } else {
                unmatched_guess.push(g);
                *solution_available.entry(s).or_insert(0) += 1;
            }
        }

        // Second pass: misplaced symbols, consuming the pool
        let mut misplaced = 0;
        for symbol in unmatched_guess {
            if let Some(count) = solution_available.get_mut(&symbol)
                && *count > 0
            {
                *count -= 1;
                misplaced += 1;
            }
        }

        let score = Self::new(exact, misplaced);
        debug!(guess = %guess, solution = %solution, %score, "scored guess");
        Ok(score)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.exact, self.misplaced)
    }
}

impl FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (exact, misplaced) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid score string: {s}"))?;

        let exact = exact
            .parse()
            .map_err(|_| format!("Invalid exact count in score: {s}"))?;
        let misplaced = misplaced
            .parse()
            .map_err(|_| format!("Invalid misplaced count in score: {s}"))?;

        Ok(Self::new(exact, misplaced))
    }
}
