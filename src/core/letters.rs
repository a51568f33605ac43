//! Letter sets
//!
//! A `LetterSet` stores a subset of `a..=z` as a 26-bit mask, so the set
//! algebra the deducer leans on (intersection, difference, containment) is a
//! single integer operation.

use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter `a..=z`
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// Number of letters in the alphabet
    pub const ALPHABET_SIZE: usize = 26;

    /// Build a set from the letters of `text`
    ///
    /// Returns `None` if `text` contains anything other than ASCII letters.
    /// Upper case is folded to lower case; repeated letters collapse.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("Cab").unwrap();
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(b'c'));
    /// assert!(LetterSet::from_letters("a1").is_none());
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Option<Self> {
        let mut mask = 0u32;
        for byte in text.bytes() {
            let lower = byte.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return None;
            }
            mask |= bit(lower);
        }
        Some(Self(mask))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if `letter` (a lowercase ASCII byte) is in the set
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & bit(letter) != 0
    }

    /// Add a lowercase ASCII letter; other bytes are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= bit(letter);
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

#[inline]
const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for LetterSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Sub for LetterSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter.to_ascii_lowercase());
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_letters_folds_case_and_duplicates() {
        let set = LetterSet::from_letters("AbAb").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "ab");
    }

    #[test]
    fn from_letters_rejects_non_letters() {
        assert!(LetterSet::from_letters("ab c").is_none());
        assert!(LetterSet::from_letters("ab3").is_none());
        assert_eq!(LetterSet::from_letters(""), Some(LetterSet::EMPTY));
    }

    #[test]
    fn alphabet_has_every_letter() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains(b'a'));
        assert!(LetterSet::ALPHABET.contains(b'z'));
        assert!(!LetterSet::ALPHABET.contains(b'A'));
    }

    #[test]
    fn set_algebra() {
        let abc = LetterSet::from_letters("abc").unwrap();
        let bcd = LetterSet::from_letters("bcd").unwrap();

        assert_eq!((abc & bcd).to_string(), "bc");
        assert_eq!((abc | bcd).to_string(), "abcd");
        assert_eq!((abc - bcd).to_string(), "a");
        assert!((abc & bcd).is_subset(abc));
        assert!(!abc.is_subset(bcd));
        assert!(abc.is_disjoint(LetterSet::from_letters("xyz").unwrap()));
    }

    #[test]
    fn iter_is_alphabetical() {
        let set: LetterSet = b"zyxa".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"axyz".to_vec());
    }
}
