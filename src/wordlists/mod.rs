//! Word lists for Jotto solving
//!
//! Provides the `Dictionary` plus an embedded default list compiled into the
//! binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
