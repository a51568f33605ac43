//! Core domain types for Jotto
//!
//! This module contains the fundamental domain types. Apart from the error
//! derive, they have no external dependencies and no state.

mod combination;
mod directive;
pub mod error;
mod guess;
mod letters;
mod word;

pub use combination::{LetterCombination, combinations_of, combinations_of_size};
pub use directive::Directive;
pub use error::{InvalidInput, SessionError, WordError};
pub use guess::Guess;
pub use letters::LetterSet;
pub use word::{Word, is_jotto_word};
