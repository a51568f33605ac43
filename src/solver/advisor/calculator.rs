//! Outcome simulation for a probe word
//!
//! Given a probe and the live session, computes how many candidates would
//! remain for every possible match count.

use super::Scenario;
use crate::core::Word;
use crate::solver::Session;

/// Remaining-candidate count for each match count `0..=word_length`
///
/// Each count is measured on a fresh clone of `session`, which is dropped
/// immediately afterwards, so the live session is never touched.
///
/// # Examples
/// ```
/// use jotto_solver::core::Word;
/// use jotto_solver::solver::Session;
/// use jotto_solver::solver::advisor::simulate_outcomes;
/// use jotto_solver::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_lines(["cat", "dog", "rat", "bat"]);
/// let session = Session::new(&dictionary, 3).unwrap();
///
/// let outcomes = simulate_outcomes(&session, &Word::new("dog").unwrap());
/// assert_eq!(outcomes.len(), 4);
/// assert_eq!(outcomes[0], 3); // cat, rat, bat share nothing with dog
/// assert_eq!(session.remaining(), 4);
/// ```
#[must_use]
pub fn simulate_outcomes(session: &Session, probe: &Word) -> Vec<usize> {
    (0..=session.word_length())
        .map(|matches| {
            let mut snapshot = session.clone();
            snapshot.pick_word(probe, matches);
            snapshot.remaining()
        })
        .collect()
}

/// Score a probe: simulate every outcome, then reduce with `scenario`
#[must_use]
pub fn score_probe(session: &Session, probe: &Word, scenario: Scenario) -> (usize, Vec<usize>) {
    let outcomes = simulate_outcomes(session, probe);
    (scenario.score(&outcomes), outcomes)
}
