//! Next-probe advisor
//!
//! Simulates candidate probes against every possible match count and picks
//! the one that leaves the fewest candidates in the worst (or average) case.

mod calculator;
mod selector;

pub use calculator::{score_probe, simulate_outcomes};
pub use selector::{Recommendation, select_best_probe};

use crate::core::Word;
use crate::solver::Session;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Objective used to reduce a probe's outcome vector to a single score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Largest remaining count over all match counts
    #[default]
    Worst,
    /// Rounded mean remaining count over all match counts
    Average,
}

impl Scenario {
    /// Create a scenario from its name, falling back to worst case
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "average" | "avg" | "mean" => Self::Average,
            _ => Self::Worst,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Worst => "worst",
            Self::Average => "average",
        }
    }

    /// Reduce outcomes to a score; lower is better
    ///
    /// An empty slice scores zero.
    #[must_use]
    pub fn score(self, outcomes: &[usize]) -> usize {
        if outcomes.is_empty() {
            return 0;
        }
        match self {
            Self::Worst => outcomes.iter().copied().max().unwrap_or(0),
            Self::Average => {
                let total: usize = outcomes.iter().sum();
                (total as f64 / outcomes.len() as f64).round() as usize
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Advisor settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub scenario: Scenario,
    /// Maximum number of probes simulated per recommendation
    pub sample_size: usize,
    /// Fixed seed for reproducible sampling
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::Worst,
            sample_size: 100,
            seed: None,
        }
    }
}

/// Recommends the next probe for a session
///
/// # Examples
/// ```
/// use jotto_solver::solver::advisor::{GuessAdvisor, SolverConfig};
/// use jotto_solver::solver::Session;
/// use jotto_solver::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_lines(["cat", "dog", "rat", "bat", "pig"]);
/// let session = Session::new(&dictionary, 3).unwrap();
///
/// let advisor = GuessAdvisor::new(SolverConfig::default());
/// let best = advisor.recommend(&session, &Default::default()).unwrap();
/// assert!(session.candidates().contains(&best.word));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuessAdvisor {
    config: SolverConfig,
}

impl GuessAdvisor {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Per-match-count outcomes for a single probe
    #[must_use]
    pub fn evaluate(&self, session: &Session, probe: &Word) -> Vec<usize> {
        simulate_outcomes(session, probe)
    }

    /// Pick the best next probe
    ///
    /// The pool is every candidate not yet played and not in `skip`. Pools
    /// larger than the configured sample size are sampled down first. Ties
    /// go to the alphabetically smallest word. Returns `None` when the pool
    /// is empty.
    #[must_use]
    pub fn recommend(&self, session: &Session, skip: &FxHashSet<Word>) -> Option<Recommendation> {
        let pool: Vec<&Word> = session
            .candidates()
            .sorted()
            .into_iter()
            .filter(|word| !session.has_guessed(word) && !skip.contains(*word))
            .collect();

        if pool.is_empty() {
            debug!("Advisor: empty pool");
            return None;
        }

        let trials = self.sample(pool);
        let best = select_best_probe(session, &trials, self.config.scenario)?;

        debug!(
            "Advisor: {} trials, best {} with {} score {}",
            trials.len(),
            best.word,
            self.config.scenario,
            best.score
        );
        Some(best)
    }

    /// Sample down to `sample_size` words, keeping alphabetical order
    fn sample<'a>(&self, pool: Vec<&'a Word>) -> Vec<&'a Word> {
        let size = self.config.sample_size.max(1);
        if pool.len() <= size {
            return pool;
        }

        debug!("Advisor: sampling {size} of {} probes", pool.len());
        let mut trials: Vec<&Word> = match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                pool.choose_multiple(&mut rng, size).copied().collect()
            }
            None => pool.choose_multiple(&mut rand::rng(), size).copied().collect(),
        };
        trials.sort_unstable();
        trials
    }
}
