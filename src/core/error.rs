//! Error types
//!
//! Everything here is raised at the validation boundary. The filtering and
//! deduction operations themselves never fail.

use thiserror::Error;

/// Smallest word length a session accepts
pub const MIN_WORD_LENGTH: usize = 2;

/// Largest word length a session accepts
pub const MAX_WORD_LENGTH: usize = 15;

/// A string that is not a Jotto word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
    #[error("Word repeats the letter '{0}'")]
    RepeatedLetter(char),
}

/// Rejected configuration or observation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Word length must be between 2 and 15, got {0}")]
    InvalidWordLength(usize),

    #[error("Too many letters: got {given}, at most {limit} allowed")]
    TooManyLetters { given: usize, limit: usize },

    #[error("Match count must be between 0 and {word_length}, got {given}")]
    MatchCountOutOfRange { given: usize, word_length: usize },

    #[error("Word '{word}' must have {expected} letters")]
    WrongLength { word: String, expected: usize },

    #[error("Word '{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}

/// A console line outside the turn vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Empty input")]
    Empty,

    #[error("Unrecognized command '{0}'")]
    Unrecognized(String),

    #[error("'{command}' needs an argument")]
    MissingArgument { command: &'static str },

    #[error("'{0}' is not a set of letters")]
    NotLetters(String),

    #[error("Too many letters: got {given}, at most {limit} allowed")]
    TooManyLetters { given: usize, limit: usize },

    #[error("Please enter a number between 0 and {word_length}")]
    MatchCountOutOfRange { word_length: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_length_message_names_bounds() {
        let message = SessionError::InvalidWordLength(16).to_string();
        assert_eq!(message, "Word length must be between 2 and 15, got 16");
    }

    #[test]
    fn word_error_converts_into_session_error() {
        let err: SessionError = WordError::RepeatedLetter('e').into();
        assert_eq!(err.to_string(), "Word repeats the letter 'e'");
    }
}
