//! The full set of legal words a session draws from

use crate::core::{Word, is_jotto_word};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Every Jotto-legal word known to the solver
///
/// Shared behind an `Arc`, so sessions and their simulation snapshots hold
/// the dictionary without copying it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Arc<FxHashSet<Word>>,
}

impl Dictionary {
    /// Build a dictionary from raw lines
    ///
    /// Lines are trimmed and lowercased. Empty lines, words with repeated
    /// letters and words with non-letters are silently dropped.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["Cat", "", "letter", "dog"]);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && is_jotto_word(line))
            .filter_map(|line| Word::new(line).ok())
            .collect();

        Self {
            words: Arc::new(words),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Words of exactly `length` letters
    pub fn of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |word| word.len() == length)
    }

    /// Word count per length, shortest first
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for word in self.words.iter() {
            *histogram.entry(word.len()).or_insert(0) += 1;
        }
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_malformed_entries() {
        let dictionary = Dictionary::from_lines(["crane", "  ", "speed", "cr4ne", "x y", "Plant "]);
        let mut texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        texts.sort_unstable();
        assert_eq!(texts, ["crane", "plant"]);
    }

    #[test]
    fn deduplicates_case_insensitively() {
        let dictionary = Dictionary::from_lines(["DOG", "dog", "Dog"]);
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.contains(&Word::new("dog").unwrap()));
    }

    #[test]
    fn filters_by_length() {
        let dictionary = Dictionary::from_lines(["cat", "dog", "crane", "plant", "planet"]);
        assert_eq!(dictionary.of_length(3).count(), 2);
        assert_eq!(dictionary.of_length(5).count(), 2);
        assert_eq!(dictionary.of_length(4).count(), 0);

        let histogram = dictionary.length_histogram();
        assert_eq!(histogram.get(&6), Some(&1));
        assert_eq!(histogram.keys().copied().collect::<Vec<_>>(), [3, 5, 6]);
    }
}
