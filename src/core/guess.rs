//! A single played word and its response

use super::Word;
use std::fmt;

/// One turn: the word played and how many letters it shares with the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub matches: usize,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, matches: usize) -> Self {
        Self { word, matches }
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.matches)
    }
}
