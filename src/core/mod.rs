//! Core domain types for Mastermind scoring
//!
//! This module contains the fundamental domain types with no I/O and no process state.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod error;
mod score;

pub use code::{Alphabet, Code};
pub use error::{CodeError, ScoreError};
pub use score::Score;
