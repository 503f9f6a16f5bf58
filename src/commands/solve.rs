//! Word solving command
//!
//! Solves a specific target word and returns the solution path, driving the
//! session façade exactly as an external caller would.

use crate::core::{Pattern, Word};
use crate::solver::{SolverCore, SuggestOutcome};

/// Configuration for solving a word.
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word.
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution.
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` by repeatedly asking `solver` for a suggestion, feeding
/// back the true pattern against the target, up to `config.max_guesses` turns.
///
/// # Errors
/// Returns an error string if the target is not a valid five-letter word or the
/// session façade reports a solver error.
pub fn solve_word(config: SolveConfig, solver: &SolverCore) -> Result<SolveResult, String> {
    let target_word = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let session = solver.new_session();
    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver
            .candidates(session, 0)
            .map_err(|e| e.to_string())?
            .remaining;

        let guess_text = match solver.suggest(session).map_err(|e| e.to_string())? {
            SuggestOutcome::Solved => break,
            SuggestOutcome::Guess(word) => word,
        };

        let guess_word = Word::new(&guess_text).expect("suggestion is always a valid word");
        let pattern = Pattern::calculate(&guess_word, &target_word);
        let wire = wire_pattern(pattern);
        solver
            .observe(session, &guess_text, &wire)
            .map_err(|e| e.to_string())?;

        let candidates_after = solver
            .candidates(session, 0)
            .map_err(|e| e.to_string())?
            .remaining;

        guesses.push(GuessStep {
            word: guess_text,
            pattern,
            candidates_before,
            candidates_after,
        });

        if pattern.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target,
            });
        }
    }

    let success = guesses.last().is_some_and(|g| g.pattern.is_perfect());
    Ok(SolveResult {
        success,
        guesses,
        target: config.target,
    })
}

fn wire_pattern(pattern: Pattern) -> String {
    pattern
        .to_trits()
        .iter()
        .map(|&t| match t {
            2 => 'G',
            1 => 'Y',
            _ => 'X',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ALLOWED, ANSWERS};

    fn solver() -> SolverCore {
        let guesses = crate::core::WordSet::from_strs(ALLOWED.iter().copied());
        let answers = crate::core::WordSet::from_strs(ANSWERS.iter().copied());
        SolverCore::new(guesses, answers, false).unwrap()
    }

    #[test]
    fn solve_word_succeeds_within_budget() {
        let solver = solver();
        let config = SolveConfig::new(ANSWERS[0].to_string());
        let result = solve_word(config, &solver).unwrap();
        assert!(result.success);
        assert!(result.guesses.len() <= 6);
    }

    #[test]
    fn solve_records_monotonic_candidate_reduction() {
        let solver = solver();
        let config = SolveConfig::new(ANSWERS[3].to_string());
        let result = solve_word(config, &solver).unwrap();
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let solver = solver();
        let config = SolveConfig::new("zzzzz".to_string());
        let result = solve_word(config, &solver);
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let solver = solver();
        let mut config = SolveConfig::new(ANSWERS[0].to_string());
        config.max_guesses = 2;
        let result = solve_word(config, &solver).unwrap();
        assert!(result.guesses.len() <= 2);
    }
}
