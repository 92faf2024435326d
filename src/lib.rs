//! Mastermind Scorer
//!
//! Scores guesses in a code-breaking game: for each guess, how many symbols are in
//! the right place and how many are present but misplaced.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_scorer::batch::process_all;
//! use mastermind_scorer::core::Code;
//! use mastermind_scorer::output::render_line;
//!
//! let solution = Code::new("1234");
//! let guesses = vec![Code::new("1532"), Code::new("8793")];
//!
//! let scores = process_all(&solution, &guesses).unwrap();
//! assert_eq!(render_line(&scores), "2-1 0-1");
//! ```

// Core domain types
pub mod core;

// Batch scoring
pub mod batch;

// Argument validation
pub mod input;

// Terminal output formatting
pub mod output;

// Tracing setup
pub mod logging;
