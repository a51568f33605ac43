//! Benchmark command
//!
//! Auto-solves many secrets and summarizes the turn counts.

use super::solve::play_out;
use crate::core::{SessionError, Word};
use crate::solver::{GuessAdvisor, Session};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turn count to number of solved secrets
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw up to `count` secrets from the session's candidates
///
/// A seed makes the draw reproducible. The result is sorted.
#[must_use]
pub fn pick_secrets<'a>(session: &'a Session, count: usize, seed: Option<u64>) -> Vec<&'a Word> {
    let pool = session.candidates().sorted();
    let mut secrets: Vec<&Word> = if pool.len() <= count {
        pool
    } else {
        match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                pool.choose_multiple(&mut rng, count).copied().collect()
            }
            None => pool.choose_multiple(&mut rand::rng(), count).copied().collect(),
        }
    };
    secrets.sort_unstable();
    secrets
}

/// Run `count` auto-solved games of `word_length` letters
///
/// # Errors
///
/// Returns `SessionError::InvalidWordLength` if `word_length` is out of range.
pub fn run_benchmark(
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
    word_length: usize,
    count: usize,
    max_turns: usize,
) -> Result<BenchmarkResult, SessionError> {
    let start = Instant::now();
    let fresh = Session::new(dictionary, word_length)?;
    let secrets = pick_secrets(&fresh, count, advisor.config().seed);

    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut total_turns = 0;
    let mut min_turns = usize::MAX;
    let mut max_turns_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for (idx, &secret) in secrets.iter().enumerate() {
        let result = play_out(fresh.clone(), secret, advisor, max_turns);
        let turns = result.turns.len();

        if result.success {
            total_turns += turns;
            min_turns = min_turns.min(turns);
            max_turns_seen = max_turns_seen.max(turns);
            *distribution.entry(turns).or_insert(0) += 1;
        } else {
            failures.push(result.secret);
        }

        let solved = idx + 1 - failures.len();
        if solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_turns as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = secrets.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_turns,
        average_turns: if solved == 0 {
            0.0
        } else {
            total_turns as f64 / solved as f64
        },
        min_turns: if solved == 0 { 0 } else { min_turns },
        max_turns: max_turns_seen,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::WORDS;

    fn advisor(seed: u64) -> GuessAdvisor {
        GuessAdvisor::new(SolverConfig {
            sample_size: 20,
            seed: Some(seed),
            ..SolverConfig::default()
        })
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = Dictionary::from_lines(WORDS.iter().copied());
        let result = run_benchmark(&dictionary, &advisor(1), 4, 5, 30).unwrap();

        assert_eq!(result.total_words, 5);
        assert_eq!(result.solved, 5);
        assert!(result.failures.is_empty());
        assert!(result.min_turns >= 1);
        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = Dictionary::from_lines(["cat", "dog", "rat", "bat", "pig", "cow"]);
        let result = run_benchmark(&dictionary, &advisor(2), 3, 10, 30).unwrap();

        // Only six candidates exist
        assert_eq!(result.total_words, 6);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        let turn_sum: usize = result.distribution.iter().map(|(t, n)| t * n).sum();
        assert_eq!(turn_sum, result.total_turns);
    }

    #[test]
    fn seeded_secrets_are_reproducible() {
        let dictionary = Dictionary::from_lines(WORDS.iter().copied());
        let session = Session::new(&dictionary, 5).unwrap();

        let first = pick_secrets(&session, 8, Some(42));
        let second = pick_secrets(&session, 8, Some(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn benchmark_with_no_candidates() {
        let dictionary = Dictionary::from_lines(["cat", "dog"]);
        let result = run_benchmark(&dictionary, &advisor(3), 7, 10, 30).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_turns, 0);
        assert_eq!(result.min_turns, 0);
    }

    #[test]
    fn benchmark_rejects_bad_length() {
        let dictionary = Dictionary::from_lines(["cat"]);
        assert!(run_benchmark(&dictionary, &advisor(4), 1, 10, 30).is_err());
    }
}
