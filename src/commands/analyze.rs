//! Word analysis command
//!
//! Shows how a single probe would split the fresh candidate set.

use crate::core::{SessionError, Word};
use crate::solver::{GuessAdvisor, Scenario, Session};
use crate::wordlists::Dictionary;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Remaining candidates for each match count `0..=len`
    pub outcomes: Vec<usize>,
    pub worst_case: usize,
    pub average_case: usize,
    pub total_candidates: usize,
}

impl AnalysisResult {
    /// Match count that leaves the most candidates
    #[must_use]
    pub fn worst_match_count(&self) -> Option<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .max_by_key(|&(_, remaining)| *remaining)
            .map(|(matches, _)| matches)
    }
}

/// Analyze `word` as an opening probe
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a valid Jotto word, or its length is out of range
/// - The word is not in the dictionary
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
) -> Result<AnalysisResult, SessionError> {
    let probe = Word::new(word)?;
    let session = Session::new(dictionary, probe.len())?;
    let probe = session.substitute(probe.text())?;

    let outcomes = advisor.evaluate(&session, &probe);

    Ok(AnalysisResult {
        word: probe.text().to_string(),
        worst_case: Scenario::Worst.score(&outcomes),
        average_case: Scenario::Average.score(&outcomes),
        outcomes,
        total_candidates: session.remaining(),
    })
}
