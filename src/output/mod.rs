//! Terminal output formatting
//!
//! Result line rendering and the verbose per-guess breakdown.

pub mod display;
pub mod formatters;

pub use display::print_breakdown;
pub use formatters::render_line;
