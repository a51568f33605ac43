//! Probe selection
//!
//! Scores every trial probe and keeps the one with the lowest score.

use super::Scenario;
use super::calculator::score_probe;
use crate::core::Word;
use crate::solver::Session;
use log::trace;

/// A chosen probe with its score and per-match-count outcomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub word: Word,
    pub score: usize,
    pub outcomes: Vec<usize>,
}

/// Select the probe with the minimum score
///
/// Trials are scored in the order given; on a tie the earliest trial wins.
/// Returns `None` if `trials` is empty.
#[must_use]
pub fn select_best_probe(
    session: &Session,
    trials: &[&Word],
    scenario: Scenario,
) -> Option<Recommendation> {
    trials
        .iter()
        .map(|&probe| {
            let (score, outcomes) = score_probe(session, probe, scenario);
            trace!("probe {probe}: score {score}, outcomes {outcomes:?}");
            Recommendation {
                word: probe.clone(),
                score,
                outcomes,
            }
        })
        .min_by_key(|recommendation| recommendation.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn session() -> Session {
        let dictionary = Dictionary::from_lines(["cat", "dog", "rat", "bat", "pig", "cow"]);
        Session::new(&dictionary, 3).unwrap()
    }

    #[test]
    fn selects_lowest_worst_case() {
        let session = session();
        let words: Vec<Word> = ["cat", "dog", "pig"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let trials: Vec<&Word> = words.iter().collect();

        let best = select_best_probe(&session, &trials, Scenario::Worst).unwrap();

        for probe in &words {
            let (score, _) = score_probe(&session, probe, Scenario::Worst);
            assert!(best.score <= score);
        }
    }

    #[test]
    fn ties_go_to_earliest_trial() {
        let session = session();
        let cat = Word::new("cat").unwrap();

        let best = select_best_probe(&session, &[&cat, &cat], Scenario::Average).unwrap();
        assert_eq!(best.word, cat);

        let rat = Word::new("rat").unwrap();
        let bat = Word::new("bat").unwrap();
        // rat and bat are symmetric against this set
        let (rat_score, _) = score_probe(&session, &rat, Scenario::Worst);
        let (bat_score, _) = score_probe(&session, &bat, Scenario::Worst);
        assert_eq!(rat_score, bat_score);

        let best = select_best_probe(&session, &[&bat, &rat], Scenario::Worst).unwrap();
        assert_eq!(best.word, bat);
    }

    #[test]
    fn returns_none_on_empty_trials() {
        assert!(select_best_probe(&session(), &[], Scenario::Worst).is_none());
    }
}
