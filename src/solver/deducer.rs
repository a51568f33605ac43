//! Cross-guess letter deduction
//!
//! Two rules tighten the candidate set beyond what each guess filters on its
//! own:
//!
//! - **Saturation**: once a guess's match count is fully explained by letters
//!   already known kept (or its misses by letters known removed), every other
//!   letter of that guess is decided.
//! - **Differencing**: for two guesses of length `L` sharing `s` letters, the
//!   match counts differ by at most `L - s`. When the gap reaches that bound,
//!   the higher guess's unshared letters are all in the secret and the lower
//!   guess's unshared letters are all out.
//!
//! Each filter refreshes the classification, so both rules read it afresh
//! for every guess, and the passes repeat until nothing changes.

use super::candidates::CandidateStore;
use crate::core::{Guess, LetterSet};
use log::debug;

/// Apply both deduction rules to a fixpoint
///
/// Returns the number of candidates removed. Running it again with the same
/// history removes nothing.
pub fn trim_letters(store: &mut CandidateStore, history: &[Guess], word_length: usize) -> usize {
    let start = store.len();

    loop {
        let before = store.len();
        saturate_single_guesses(store, history, word_length);
        difference_guess_pairs(store, history, word_length);
        if store.len() == before {
            break;
        }
    }

    start - store.len()
}

fn saturate_single_guesses(store: &mut CandidateStore, history: &[Guess], word_length: usize) {
    for guess in history {
        let letters = guess.word.letters();

        let matching = letters & store.classification().kept;
        if matching.len() == guess.matches {
            let removed = exclude(store, letters - matching);
            if removed > 0 {
                debug!(
                    "{guess}: matches explained by {{{matching}}}, excluding {{{}}} ({removed} removed)",
                    letters - matching
                );
            }
        }

        let non_matching = letters & store.classification().removed;
        if non_matching.len() + guess.matches == word_length {
            let removed = keep(store, letters - non_matching);
            if removed > 0 {
                debug!(
                    "{guess}: misses explained by {{{non_matching}}}, keeping {{{}}} ({removed} removed)",
                    letters - non_matching
                );
            }
        }
    }
}

fn difference_guess_pairs(store: &mut CandidateStore, history: &[Guess], word_length: usize) {
    for (i, first) in history.iter().enumerate() {
        for second in &history[i + 1..] {
            if first.matches == second.matches {
                continue;
            }
            let (low, high) = if first.matches < second.matches {
                (first, second)
            } else {
                (second, first)
            };

            let shared = low.word.letters() & high.word.letters();
            let gap = high.matches - low.matches;
            if shared.len() + gap != word_length {
                continue;
            }

            let kept = high.word.letters() - shared;
            let excluded = low.word.letters() - shared;
            let removed = keep(store, kept) + exclude(store, excluded);
            if removed > 0 {
                debug!(
                    "{high} vs {low}: keeping {{{kept}}}, excluding {{{excluded}}} ({removed} removed)"
                );
            }
        }
    }
}

fn keep(store: &mut CandidateStore, letters: LetterSet) -> usize {
    let before = store.len();
    if !letters.is_empty() {
        store.keep_letters(letters);
    }
    before - store.len()
}

fn exclude(store: &mut CandidateStore, letters: LetterSet) -> usize {
    let before = store.len();
    if !letters.is_empty() {
        store.exclude_letters(letters);
    }
    before - store.len()
}
