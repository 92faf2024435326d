//! Batch scoring
//!
//! Applies the scorer to an ordered list of guesses, one result per guess.

mod processor;

pub use processor::{process_all, process_all_parallel, score_each};
