//! Sequential and parallel batch processors
//!
//! Every guess is scored independently, so the parallel variant needs no locking.

use crate::core::{Code, Score, ScoreError};
use rayon::prelude::*;
use tracing::info;

/// Score every guess against `solution`, preserving order
///
/// Aborts on the first guess whose length differs from the solution.
///
/// # Errors
///
/// Returns [`ScoreError::Guess`] wrapping the failure and the index of the guess.
///
/// # Examples
/// ```
/// use mastermind_scorer::batch::process_all;
/// use mastermind_scorer::core::{Code, Score};
///
/// let solution = Code::new("1234");
/// let guesses = vec![Code::new("1532"), Code::new("8793")];
///
/// let scores = process_all(&solution, &guesses).unwrap();
/// assert_eq!(scores, vec![Score::new(2, 1), Score::new(0, 1)]);
/// ```
pub fn process_all(solution: &Code, guesses: &[Code]) -> Result<Vec<Score>, ScoreError> {
    let scores = guesses
        .iter()
        .enumerate()
        .map(|(index, guess)| {
            Score::calculate(guess, solution).map_err(|e| e.at_index(index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(guesses = scores.len(), "scored batch");
    Ok(scores)
}

/// Parallel version of [`process_all`]
///
/// Produces the same output in the same order; when several guesses fail, the
/// lowest index is reported.
///
/// # Errors
///
/// Returns [`ScoreError::Guess`] wrapping the failure and the index of the guess.
pub fn process_all_parallel(
    solution: &Code,
    guesses: &[Code],
) -> Result<Vec<Score>, ScoreError> {
    let results: Vec<Result<Score, ScoreError>> = guesses
        .par_iter()
        .map(|guess| Score::calculate(guess, solution))
        .collect();

    let scores = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| result.map_err(|e| e.at_index(index)))
        .collect::<Result<Vec<_>, _>>()?;

    info!(guesses = scores.len(), "scored batch in parallel");
    Ok(scores)
}

/// Score every guess, keeping failures in place instead of aborting
#[must_use]
pub fn score_each(solution: &Code, guesses: &[Code]) -> Vec<Result<Score, ScoreError>> {
    guesses
        .iter()
        .map(|guess| Score::calculate(guess, solution))
        .collect()
}
