//! Benchmark command
//!
//! Tests solver performance across multiple words, exercising the same
//! `SolverCore` session façade the CLI and library callers use.

use crate::solver::{SolverCore, SuggestOutcome};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::solve::{solve_word, SolveConfig};

/// Result of a benchmark run.
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against every word in `target_words`.
pub fn run_benchmark(solver: &SolverCore, target_words: &[String]) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in target_words {
        let config = SolveConfig::new(target.clone());
        let Ok(result) = solve_word(config, solver) else {
            continue;
        };
        let guesses = result.guesses.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses: total_guesses as f64 / total_words.max(1) as f64,
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::MIN_POSITIVE),
    }
}

/// Quickly probe whether `suggest` behaves on an empty session, without a full
/// solve loop — used by the CLI's `benchmark --dry-run` path.
#[must_use]
pub fn dry_run_first_suggestion(solver: &SolverCore) -> Option<String> {
    let session = solver.new_session();
    match solver.suggest(session).ok()? {
        SuggestOutcome::Guess(word) => Some(word),
        SuggestOutcome::Solved => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSet;
    use crate::wordlists::{ALLOWED, ANSWERS};

    fn solver() -> SolverCore {
        let guesses = WordSet::from_strs(ALLOWED.iter().copied());
        let answers = WordSet::from_strs(ANSWERS.iter().copied());
        SolverCore::new(guesses, answers, false).unwrap()
    }

    #[test]
    fn benchmark_runs_over_a_sample() {
        let solver = solver();
        let targets: Vec<String> = ANSWERS[..10].iter().map(|s| s.to_string()).collect();
        let result = run_benchmark(&solver, &targets);

        assert_eq!(result.total_words, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let solver = solver();
        let targets: Vec<String> = ANSWERS[..10].iter().map(|s| s.to_string()).collect();
        let result = run_benchmark(&solver, &targets);

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_words);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let solver = solver();
        let result = run_benchmark(&solver, &[]);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
    }

    #[test]
    fn dry_run_returns_the_opening_guess() {
        let solver = solver();
        let suggestion = dry_run_first_suggestion(&solver);
        assert!(suggestion.is_some());
    }
}
