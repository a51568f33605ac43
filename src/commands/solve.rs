//! Word solving command
//!
//! Auto-plays against a known secret and records every turn.

use crate::core::{SessionError, Word};
use crate::solver::{GuessAdvisor, Session, TurnOutcome};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;

/// Turn limit used unless a caller overrides it
pub const DEFAULT_MAX_TURNS: usize = 30;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub turns: Vec<TurnStep>,
    pub secret: String,
}

/// A single turn in the solution
pub struct TurnStep {
    pub word: String,
    pub matches: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Advisor score of the probe at the time it was played
    pub score: usize,
}

/// Solve `config.secret` from a fresh session
///
/// The word length is taken from the secret.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid Jotto word, or its length is out of range
/// - The secret is not in the dictionary
pub fn solve_word(
    config: SolveConfig,
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
) -> Result<SolveResult, SessionError> {
    let secret = Word::new(&config.secret)?;
    let session = Session::new(dictionary, secret.len())?;
    let secret = session.substitute(secret.text())?;

    Ok(play_out(session, &secret, advisor, config.max_turns))
}

/// Play `session` to the end against `secret`
///
/// The session must still contain `secret` for the game to succeed.
pub fn play_out(
    mut session: Session,
    secret: &Word,
    advisor: &GuessAdvisor,
    max_turns: usize,
) -> SolveResult {
    let skip = FxHashSet::default();
    let mut turns = Vec::new();
    let mut success = false;

    for _ in 0..max_turns {
        let candidates_before = session.remaining();
        let Some(recommendation) = advisor.recommend(&session, &skip) else {
            break;
        };

        let probe = recommendation.word;
        let matches = probe.matches(secret);
        // Probes come from the session's candidates, so they always validate
        let Ok(outcome) = session.observe(&probe, matches) else {
            break;
        };

        turns.push(TurnStep {
            word: probe.text().to_string(),
            matches,
            candidates_before,
            candidates_after: session.remaining(),
            score: recommendation.score,
        });

        if &probe == secret {
            success = true;
            break;
        }
        if outcome == TurnOutcome::Contradiction {
            break;
        }
    }

    SolveResult {
        success,
        turns,
        secret: secret.text().to_string(),
    }
}
