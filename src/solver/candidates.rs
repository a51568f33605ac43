//! Candidate word set and its filtering operations
//!
//! Every mutation refreshes the kept/removed classification before returning,
//! so readers never observe a stale classification.

use super::classifier::LetterClassification;
use crate::core::{LetterCombination, LetterSet, Word, combinations_of_size};
use rustc_hash::FxHashSet;

/// The surviving candidate words
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    words: FxHashSet<Word>,
    classification: LetterClassification,
}

impl CandidateStore {
    /// Create a store holding `words`
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let words: FxHashSet<Word> = words.into_iter().collect();
        let classification = LetterClassification::refresh(&words);
        Self {
            words,
            classification,
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

    /// Unordered iteration over candidates
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Candidates in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    /// Current kept/removed classification
    #[inline]
    #[must_use]
    pub const fn classification(&self) -> LetterClassification {
        self.classification
    }

    /// Keep only candidates of exactly `length` letters
    pub fn restrict_to_length(&mut self, length: usize) {
        self.retain(|word| word.len() == length);
    }

    /// Keep candidates that contain some `matches`-letter combination of `guess`
    ///
    /// A candidate survives iff it contains every letter of at least one
    /// `matches`-sized combination of the guess's letters, so words sharing
    /// more letters also survive; the deducer tightens that afterwards. Zero
    /// matches is the special case of sharing no letter at all.
    ///
    /// The caller guarantees `matches <= guess.len()`.
    pub fn eliminate_by_matches(&mut self, guess: &Word, matches: usize) {
        let guess_letters = guess.letters();

        if matches == 0 {
            self.retain(|word| word.letters().is_disjoint(guess_letters));
            return;
        }

        let combinations: Vec<LetterSet> = combinations_of_size(guess.text(), matches)
            .iter()
            .map(LetterCombination::to_set)
            .collect();

        self.retain(|word| {
            combinations
                .iter()
                .any(|combination| combination.is_subset(word.letters()))
        });
    }

    /// Keep only candidates containing every letter in `letters`
    pub fn keep_letters(&mut self, letters: LetterSet) {
        self.retain(|word| letters.is_subset(word.letters()));
    }

    /// Drop every candidate containing any letter in `letters`
    pub fn exclude_letters(&mut self, letters: LetterSet) {
        self.retain(|word| word.letters().is_disjoint(letters));
    }

    /// Remove a single word; returns whether it was present
    pub fn discard(&mut self, word: &Word) -> bool {
        let removed = self.words.remove(word);
        if removed {
            self.classification = LetterClassification::refresh(&self.words);
        }
        removed
    }

    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Word) -> bool,
    {
        let before = self.words.len();
        self.words.retain(keep);
        if self.words.len() != before {
            self.classification = LetterClassification::refresh(&self.words);
        }
    }
}
