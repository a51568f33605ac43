//! Terminal output formatting
//!
//! Colored printing of command results plus small text formatters shared
//! with the console loop.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::{format_letters, remaining_bar, word_rows};
