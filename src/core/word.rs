//! Jotto word representation
//!
//! A Word stores validated lowercase text together with its letter set, so
//! match counting and candidate filtering never re-scan the text.

use super::error::WordError;
use super::letters::LetterSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A word with no repeated letters
///
/// The text is shared, so cloning a `Word` (and therefore cloning a whole
/// candidate set for simulation) does not copy string data.
#[derive(Debug, Clone)]
pub struct Word {
    text: Arc<str>,
    letters: LetterSet,
}

/// Returns true if every character of `text` is distinct
///
/// This is the raw legality test used while loading a dictionary; it does not
/// check the alphabet.
///
/// # Examples
/// ```
/// use jotto_solver::core::is_jotto_word;
///
/// assert!(is_jotto_word("crane"));
/// assert!(!is_jotto_word("speed"));
/// ```
#[must_use]
pub fn is_jotto_word(text: &str) -> bool {
    let mut seen = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if seen.contains(&ch) {
            return false;
        }
        seen.push(ch);
    }
    true
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains anything other than ASCII letters
    /// - Repeats a letter
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("speed").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_ascii_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letters = LetterSet::EMPTY;
        for byte in text.bytes() {
            if !byte.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacters);
            }
            if letters.contains(byte) {
                return Err(WordError::RepeatedLetter(byte as char));
            }
            letters.insert(byte);
        }

        Ok(Self {
            text: Arc::from(text),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; an empty word never validates
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of letters in this word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Jotto score of `self` against `other`: letters shared, position ignored
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Word;
    ///
    /// let guess = Word::new("cat").unwrap();
    /// let secret = Word::new("rat").unwrap();
    /// assert_eq!(guess.matches(&secret), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn matches(&self, other: &Self) -> usize {
        self.letters.intersection(other.letters).len()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.len(), 5);
        assert_eq!(word.letters().to_string(), "acenr");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_rejects_repeats() {
        assert_eq!(Word::new("speed"), Err(WordError::RepeatedLetter('e')));
        assert_eq!(Word::new("Aa"), Err(WordError::RepeatedLetter('a')));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cra e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn matches_ignores_position() {
        let guess = Word::new("stone").unwrap();
        let secret = Word::new("notes").unwrap();
        assert_eq!(guess.matches(&secret), 5);

        let other = Word::new("brick").unwrap();
        assert_eq!(guess.matches(&other), 0);
    }

    #[test]
    fn is_jotto_word_checks_distinct_characters() {
        assert!(is_jotto_word("abc"));
        assert!(is_jotto_word(""));
        assert!(!is_jotto_word("abca"));
        assert!(!is_jotto_word("letter"));
    }

    #[test]
    fn word_equality_and_order() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
        assert!(word1 < word3);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
