//! Kept/removed letter classification
//!
//! Derived entirely from the current candidate set and recomputed after
//! every mutation.

use crate::core::{LetterSet, Word};

/// Letters known to be in, or absent from, every surviving candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterClassification {
    /// Present in every candidate
    pub kept: LetterSet,
    /// Present in no candidate
    pub removed: LetterSet,
}

impl LetterClassification {
    /// Classify the alphabet against `candidates`
    ///
    /// Every letter starts in both sets. A candidate lacking a letter evicts
    /// it from `kept`; a candidate containing it evicts it from `removed`.
    /// With no candidates nothing is kept and everything is removed.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Word;
    /// use jotto_solver::solver::LetterClassification;
    ///
    /// let words = [Word::new("cat").unwrap(), Word::new("rat").unwrap()];
    /// let classes = LetterClassification::refresh(&words);
    ///
    /// assert_eq!(classes.kept.to_string(), "at");
    /// assert!(classes.removed.contains(b'z'));
    /// assert!(!classes.removed.contains(b'c'));
    /// ```
    pub fn refresh<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut kept = LetterSet::ALPHABET;
        let mut seen = LetterSet::EMPTY;
        let mut any = false;

        for word in candidates {
            any = true;
            kept = kept & word.letters();
            seen = seen | word.letters();
        }

        if !any {
            kept = LetterSet::EMPTY;
        }

        Self {
            kept,
            removed: LetterSet::ALPHABET - seen,
        }
    }

    /// Letters neither kept nor removed
    #[must_use]
    pub fn ambiguous(&self) -> LetterSet {
        LetterSet::ALPHABET - self.kept - self.removed
    }
}

impl Default for LetterClassification {
    fn default() -> Self {
        Self::refresh(std::iter::empty())
    }
}
