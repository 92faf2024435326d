//! Command-line input handling
//!
//! Turns raw argument strings into validated codes so the scoring core never
//! touches the process environment.

mod config;
mod submission;

pub use config::Config;
pub use submission::{InputError, Submission};
