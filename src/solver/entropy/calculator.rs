//! Dense-bucket entropy scoring for Wordle guesses.
//!
//! Buckets candidates by feedback pattern in a fixed `[u32; 243]` array instead of a
//! hash map, since the pattern space is small and fixed; no per-candidate heap
//! allocation is needed to score a guess.

use crate::core::{Pattern, Word, WordIndex, WordSet};
use rayon::prelude::*;

/// Score of one candidate guess against the current surviving answer set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore {
    /// Expected information gain in bits: `-Σ p_c log2 p_c`.
    pub entropy: f64,
    /// Size of the largest pattern bucket (worst-case remaining candidates).
    pub worst_bucket: usize,
    /// `Σ n_c ln(n_c)` over bucket counts; ascending order is the same ranking as
    /// descending entropy for fixed `|A|`, without the rounding noise of repeated division.
    pub surrogate: f64,
}

impl GuessScore {
    const ZERO: Self = Self {
        entropy: 0.0,
        worst_bucket: 0,
        surrogate: 0.0,
    };
}

/// Bucket `answers` by the pattern `guess` produces against each, and derive a [`GuessScore`].
#[must_use]
pub fn score(guess: &Word, answers: &[&Word]) -> GuessScore {
    if answers.is_empty() {
        return GuessScore::ZERO;
    }

    let mut buckets = [0u32; Pattern::SPACE_SIZE];
    for &answer in answers {
        let pattern = Pattern::calculate(guess, answer);
        buckets[pattern.value() as usize] += 1;
    }

    score_from_buckets(&buckets, answers.len())
}

fn score_from_buckets(buckets: &[u32; Pattern::SPACE_SIZE], total: usize) -> GuessScore {
    let total_f = total as f64;
    let mut entropy = 0.0;
    let mut surrogate = 0.0;
    let mut worst_bucket = 0;

    for &count in buckets {
        if count == 0 {
            continue;
        }
        let n = f64::from(count);
        let p = n / total_f;
        entropy -= p * p.log2();
        surrogate += n * n.ln();
        worst_bucket = worst_bucket.max(count as usize);
    }

    GuessScore {
        entropy,
        worst_bucket,
        surrogate,
    }
}

/// Score every guess in `guesses` against `answers`, in parallel.
#[must_use]
pub fn score_all(guesses: &WordSet, answers: &[&Word]) -> Vec<(WordIndex, GuessScore)> {
    guesses
        .iter_indexed()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(idx, guess)| (idx, score(guess, answers)))
        .collect()
}
