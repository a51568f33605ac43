//! Letter combination enumeration
//!
//! Produces every sub-multiset of a word's letters. For a Jotto word the
//! letters are distinct and this is the power set.

use super::letters::LetterSet;
use std::fmt;

/// A sorted selection of letters drawn from one word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterCombination(Vec<u8>);

impl LetterCombination {
    /// The selected letters, in ascending order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapse to a letter set (lossless when the source word is Jotto-legal)
    #[must_use]
    pub fn to_set(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }
}

impl fmt::Display for LetterCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}

/// Enumerate all letter combinations of `word`, empty combination first
///
/// Letters are sorted, then combinations are grown depth-first from each
/// starting index. Equal neighbours are skipped at each depth, so a word
/// with a repeated letter still yields every sub-multiset exactly once.
///
/// # Examples
/// ```
/// use jotto_solver::core::combinations_of;
///
/// let combos = combinations_of("cat");
/// assert_eq!(combos.len(), 8);
/// assert!(combos[0].is_empty());
/// ```
#[must_use]
pub fn combinations_of(word: &str) -> Vec<LetterCombination> {
    let mut letters: Vec<u8> = word.bytes().collect();
    letters.sort_unstable();

    let mut combinations = vec![LetterCombination(Vec::new())];
    let mut current = Vec::with_capacity(letters.len());
    extend_combinations(&letters, 0, &mut current, &mut combinations);
    combinations
}

/// Only the combinations of exactly `size` letters
#[must_use]
pub fn combinations_of_size(word: &str, size: usize) -> Vec<LetterCombination> {
    combinations_of(word)
        .into_iter()
        .filter(|combination| combination.len() == size)
        .collect()
}

fn extend_combinations(
    letters: &[u8],
    start: usize,
    current: &mut Vec<u8>,
    out: &mut Vec<LetterCombination>,
) {
    for i in start..letters.len() {
        if i != start && letters[i] == letters[i - 1] {
            continue;
        }
        current.push(letters[i]);
        out.push(LetterCombination(current.clone()));
        extend_combinations(letters, i + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn as_strings(combinations: &[LetterCombination]) -> Vec<String> {
        combinations
            .iter()
            .map(|c| String::from_utf8(c.letters().to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn power_set_size_for_distinct_letters() {
        for word in ["ab", "cat", "crane", "planets", "abcdefghij"] {
            let combinations = combinations_of(word);
            let distinct: FxHashSet<_> = combinations.iter().cloned().collect();

            assert_eq!(combinations.len(), 1 << word.len(), "word {word}");
            assert_eq!(distinct.len(), combinations.len(), "word {word}");
        }
    }

    #[test]
    fn empty_combination_appears_once() {
        let combinations = combinations_of("crane");
        assert_eq!(combinations.iter().filter(|c| c.is_empty()).count(), 1);
    }

    #[test]
    fn empty_word_yields_only_empty_combination() {
        let combinations = combinations_of("");
        assert_eq!(combinations.len(), 1);
        assert!(combinations[0].is_empty());
    }

    #[test]
    fn depth_first_sorted_order() {
        let combinations = combinations_of("cab");
        assert_eq!(
            as_strings(&combinations),
            ["", "a", "ab", "abc", "ac", "b", "bc", "c"]
        );
    }

    #[test]
    fn repeated_letters_do_not_duplicate_subsets() {
        let combinations = combinations_of("aab");
        assert_eq!(as_strings(&combinations), ["", "a", "aa", "aab", "ab", "b"]);
    }

    #[test]
    fn sized_combinations() {
        let pairs = combinations_of_size("crane", 2);
        assert_eq!(pairs.len(), 10);
        assert!(pairs.iter().all(|c| c.len() == 2));

        assert_eq!(combinations_of_size("crane", 0).len(), 1);
        assert_eq!(combinations_of_size("crane", 5).len(), 1);
        assert!(combinations_of_size("crane", 6).is_empty());
    }

    #[test]
    fn to_set_matches_letters() {
        let combinations = combinations_of_size("dog", 3);
        assert_eq!(combinations[0].to_set().to_string(), "dgo");
        assert_eq!(combinations[0].to_string(), "{dgo}");
    }
}
