//! Picks the next guess from entropy scores plus endgame/opening shortcuts.

use crate::core::{Word, WordSet};
use crate::solver::entropy::{self, GuessScore};

/// No guess could be selected: either the answer set or guess list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// The surviving answer set is empty.
    NoAnswers,
    /// The guess list has no entries to score.
    NoGuesses,
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "no candidate answers remain"),
            Self::NoGuesses => write!(f, "guess list is empty"),
        }
    }
}

impl std::error::Error for SelectorError {}

/// Optimal opener for this crate's embedded answer sample, computed offline by
/// maximizing entropy over the full list. Not a universal claim; an implementation
/// artifact of this crate's word lists.
pub const OPENING_GUESS: &str = "trace";

/// Relative slack, in surrogate units, within which two guesses are treated as tied.
const EPSILON: f64 = 1e-9;

/// Choose the next guess given the surviving answer set `answers` and the full
/// guess list `guesses`.
///
/// Shortcuts, in order: singleton/pair endgame, opening-book lookup on empty
/// history, then full entropy scoring with tie-breaks.
///
/// # Errors
/// [`SelectorError::NoAnswers`] if `answers` is empty; [`SelectorError::NoGuesses`]
/// if `guesses` is empty and the shortcuts do not apply.
pub fn select<'a>(
    guesses: &'a WordSet,
    answers: &[&'a Word],
    has_history: bool,
) -> Result<&'a Word, SelectorError> {
    if answers.is_empty() {
        return Err(SelectorError::NoAnswers);
    }

    if answers.len() == 1 {
        return Ok(answers[0]);
    }

    if answers.len() == 2 {
        return Ok(lexicographically_first(answers));
    }

    if !has_history {
        if let Some(idx) = guesses.index_of(OPENING_GUESS) {
            return Ok(guesses.get(idx));
        }
    }

    if guesses.is_empty() {
        return Err(SelectorError::NoGuesses);
    }

    general_case(guesses, answers)
}

fn lexicographically_first<'a>(words: &[&'a Word]) -> &'a Word {
    words
        .iter()
        .copied()
        .min_by_key(|w| w.text())
        .expect("non-empty by caller")
}

fn general_case<'a>(guesses: &'a WordSet, answers: &[&'a Word]) -> Result<&'a Word, SelectorError> {
    let scored = entropy::score_all(guesses, answers);
    let best_surrogate = scored
        .iter()
        .map(|(_, s)| s.surrogate)
        .fold(f64::INFINITY, f64::min);

    let answer_texts: std::collections::HashSet<&str> =
        answers.iter().map(|w| w.text()).collect();

    let winner = scored
        .into_iter()
        .filter(|(_, s)| s.surrogate <= best_surrogate + EPSILON)
        .map(|(idx, s)| (guesses.get(idx), s))
        .min_by(|(a, a_score), (b, b_score)| {
            rank_key(a, a_score, &answer_texts).cmp(&rank_key(b, b_score, &answer_texts))
        });

    winner
        .map(|(word, _)| word)
        .ok_or(SelectorError::NoGuesses)
}

/// Tie-break key, ascending-best: in-answer-set first, then smaller worst bucket,
/// then lexicographic order.
fn rank_key<'a>(
    word: &'a Word,
    score: &GuessScore,
    answer_texts: &std::collections::HashSet<&str>,
) -> (bool, usize, &'a str) {
    (!answer_texts.contains(word.text()), score.worst_bucket, word.text())
}
