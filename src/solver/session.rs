//! Session façade: a process-lifetime `SolverCore` handing out opaque `SessionId`s.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::core::{Pattern, Word, WordError, WordSet};
use crate::solver::constraints::ConstraintSet;
use crate::solver::selector::{self, SelectorError};

use thiserror::Error;

/// Closed error taxonomy surfaced at the solver boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("word is not five A-Z letters")]
    InvalidWord,
    #[error("word is not in the configured guess list")]
    UnknownGuess,
    #[error("pattern is not five G/Y/X characters")]
    InvalidPattern,
    #[error("observations are inconsistent with each other or rule out every answer")]
    Inconsistent,
    #[error("solver was constructed with an empty guess list")]
    NotInitialized,
    #[error("session id was not created by this solver")]
    UnknownSession,
}

/// Outcome of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    /// Recommended next guess.
    Guess(String),
    /// The last observation already reported a perfect match.
    Solved,
}

/// Diagnostic snapshot of the surviving answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatesInfo {
    /// Number of answers still admitted by the session's constraints.
    pub remaining: usize,
    /// Up to `sample` example survivors, in list order.
    pub sample: Vec<String>,
}

/// Opaque handle to one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

struct SessionState {
    constraints: ConstraintSet,
    history: Vec<(Word, Pattern)>,
    solved: bool,
}

impl SessionState {
    fn new() -> Self {
        Self {
            constraints: ConstraintSet::new(),
            history: Vec::new(),
            solved: false,
        }
    }
}

/// Owns both word lists for the process lifetime and multiplexes sessions behind
/// opaque ids. The lists are immutable and shared by reference across sessions;
/// the map of live sessions is the only mutable shared state, guarded by a mutex.
pub struct SolverCore {
    guess_list: WordSet,
    answer_list: WordSet,
    strict: bool,
    sessions: Mutex<HashMap<SessionId, SessionState>>,
    next_id: AtomicU64,
}

impl SolverCore {
    /// Build a solver over the given lists.
    ///
    /// # Errors
    /// [`SolverError::NotInitialized`] if `guess_list` is empty.
    pub fn new(guess_list: WordSet, answer_list: WordSet, strict: bool) -> Result<Self, SolverError> {
        if guess_list.is_empty() {
            return Err(SolverError::NotInitialized);
        }
        log::debug!(
            "solver initialized: {} guesses, {} answers, strict={strict}",
            guess_list.len(),
            answer_list.len()
        );
        Ok(Self {
            guess_list,
            answer_list,
            strict,
            sessions: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Number of words in the configured guess list.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guess_list.len()
    }

    /// Number of words in the configured answer list.
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answer_list.len()
    }

    /// Direct read access to the guess list, for callers (e.g. the CLI) that need
    /// to enumerate or score guesses outside the session façade.
    #[must_use]
    pub fn guess_list(&self) -> &WordSet {
        &self.guess_list
    }

    /// Direct read access to the answer list.
    #[must_use]
    pub fn answer_list(&self) -> &WordSet {
        &self.answer_list
    }

    /// Create a fresh, empty session bound to this solver's lists.
    #[must_use]
    pub fn new_session(&self) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.sessions
            .lock()
            .expect("session map mutex poisoned")
            .insert(id, SessionState::new());
        log::debug!("session created: {id:?}");
        id
    }

    /// Record a (guess, pattern) observation against the session's constraints.
    ///
    /// Transactional: the constraint fold happens in a scratch value, and is only
    /// committed on success, so a failed observation never mutates the session.
    ///
    /// # Errors
    /// See [`SolverError`] variants `InvalidWord`, `InvalidPattern`, `UnknownGuess`
    /// (strict mode only), `Inconsistent`, and `UnknownSession`.
    pub fn observe(&self, id: SessionId, guess: &str, pattern: &str) -> Result<(), SolverError> {
        let word = Word::new(guess).map_err(|e: WordError| {
            log::trace!("rejected observe: {e}");
            SolverError::InvalidWord
        })?;
        let parsed = parse_wire_pattern(pattern).ok_or(SolverError::InvalidPattern)?;

        if self.strict && !self.guess_list.contains(word.text()) {
            return Err(SolverError::UnknownGuess);
        }

        let mut sessions = self.sessions.lock().expect("session map mutex poisoned");
        let state = sessions.get_mut(&id).ok_or(SolverError::UnknownSession)?;

        let next_constraints = state
            .constraints
            .with_observation(&word, parsed)
            .map_err(|_| SolverError::Inconsistent)?;

        state.constraints = next_constraints;
        state.solved = parsed.is_perfect();
        state.history.push((word, parsed));
        Ok(())
    }

    /// Recommend the next guess for a session.
    ///
    /// # Errors
    /// [`SolverError::Inconsistent`] if no answer survives the session's
    /// constraints (the same underlying fact `observe` already guards
    /// against transactionally). [`SolverError::UnknownSession`] for a
    /// foreign or stale id.
    pub fn suggest(&self, id: SessionId) -> Result<SuggestOutcome, SolverError> {
        let sessions = self.sessions.lock().expect("session map mutex poisoned");
        let state = sessions.get(&id).ok_or(SolverError::UnknownSession)?;

        if state.solved {
            return Ok(SuggestOutcome::Solved);
        }

        let answers = state.constraints.filter(self.answer_list.words());
        let has_history = !state.history.is_empty();

        selector::select(&self.guess_list, &answers, has_history)
            .map(|word| SuggestOutcome::Guess(word.text().to_string()))
            .map_err(|e| match e {
                SelectorError::NoAnswers | SelectorError::NoGuesses => SolverError::Inconsistent,
            })
    }

    /// Snapshot the surviving answer set for a session, with up to `sample` example words.
    ///
    /// # Errors
    /// [`SolverError::UnknownSession`] for a foreign or stale id.
    pub fn candidates(&self, id: SessionId, sample: usize) -> Result<CandidatesInfo, SolverError> {
        let sessions = self.sessions.lock().expect("session map mutex poisoned");
        let state = sessions.get(&id).ok_or(SolverError::UnknownSession)?;

        let survivors = state.constraints.filter(self.answer_list.words());
        let sample = survivors
            .iter()
            .take(sample)
            .map(|w| w.text().to_string())
            .collect();

        Ok(CandidatesInfo {
            remaining: survivors.len(),
            sample,
        })
    }

    /// Discard a session's observation history, returning it to a fresh state.
    ///
    /// # Errors
    /// [`SolverError::UnknownSession`] for a foreign or stale id.
    pub fn reset(&self, id: SessionId) -> Result<(), SolverError> {
        let mut sessions = self.sessions.lock().expect("session map mutex poisoned");
        let state = sessions.get_mut(&id).ok_or(SolverError::UnknownSession)?;
        *state = SessionState::new();
        log::debug!("session reset: {id:?}");
        Ok(())
    }
}

fn parse_wire_pattern(s: &str) -> Option<Pattern> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 5 {
        return None;
    }
    let mut trits = [0u8; 5];
    for (slot, ch) in trits.iter_mut().zip(chars) {
        *slot = match ch.to_ascii_uppercase() {
            'G' => 2,
            'Y' => 1,
            'X' => 0,
            _ => return None,
        };
    }
    Some(Pattern::from_trits(trits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver() -> SolverCore {
        let guesses = WordSet::from_strs(["crane", "slate", "irate", "grape", "stare", "zesty"]);
        let answers = WordSet::from_strs(["slate", "irate", "grape", "stare"]);
        SolverCore::new(guesses, answers, false).unwrap()
    }

    #[test]
    fn empty_guess_list_is_not_initialized() {
        let guesses = WordSet::from_strs::<_, &str>([]);
        let answers = WordSet::from_strs(["slate"]);
        let result = SolverCore::new(guesses, answers, false);
        assert_eq!(result.err(), Some(SolverError::NotInitialized));
    }

    #[test]
    fn observe_then_suggest_round_trip() {
        let core = solver();
        let id = core.new_session();
        core.observe(id, "crane", "XXXXX").unwrap();
        let outcome = core.suggest(id).unwrap();
        assert!(matches!(outcome, SuggestOutcome::Guess(_)));
    }

    #[test]
    fn perfect_pattern_reports_solved() {
        let core = solver();
        let id = core.new_session();
        core.observe(id, "slate", "GGGGG").unwrap();
        assert_eq!(core.suggest(id).unwrap(), SuggestOutcome::Solved);
    }

    #[test]
    fn invalid_word_is_rejected_without_mutating_session() {
        let core = solver();
        let id = core.new_session();
        assert_eq!(
            core.observe(id, "toolong", "XXXXX"),
            Err(SolverError::InvalidWord)
        );
        assert_eq!(core.candidates(id, 10).unwrap().remaining, 4);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let core = solver();
        let id = core.new_session();
        assert_eq!(
            core.observe(id, "crane", "XXXXQ"),
            Err(SolverError::InvalidPattern)
        );
    }

    #[test]
    fn inconsistent_observation_leaves_session_unchanged() {
        let core = solver();
        let id = core.new_session();
        core.observe(id, "crane", "GXXXX").unwrap();
        let before = core.candidates(id, 10).unwrap();
        let result = core.observe(id, "slate", "GXXXX");
        assert_eq!(result, Err(SolverError::Inconsistent));
        let after = core.candidates(id, 10).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_session_is_rejected() {
        let core = solver();
        let bogus = SessionId(u64::MAX);
        assert_eq!(core.suggest(bogus), Err(SolverError::UnknownSession));
    }

    #[test]
    fn strict_mode_rejects_out_of_list_guess() {
        let guesses = WordSet::from_strs(["crane", "slate"]);
        let answers = WordSet::from_strs(["slate"]);
        let core = SolverCore::new(guesses, answers, true).unwrap();
        let id = core.new_session();
        assert_eq!(
            core.observe(id, "zzzzz", "XXXXX"),
            Err(SolverError::UnknownGuess)
        );
    }

    #[test]
    fn reset_clears_history() {
        let core = solver();
        let id = core.new_session();
        core.observe(id, "crane", "GXXXX").unwrap();
        core.reset(id).unwrap();
        let info = core.candidates(id, 10).unwrap();
        assert_eq!(info.remaining, 4);
    }

    #[test]
    fn singleton_answer_list_suggests_it_regardless_of_guess_list() {
        let guesses = WordSet::from_strs(["crane", "zesty"]);
        let answers = WordSet::from_strs(["slate"]);
        let core = SolverCore::new(guesses, answers, false).unwrap();
        let id = core.new_session();
        assert_eq!(
            core.suggest(id).unwrap(),
            SuggestOutcome::Guess("slate".to_string())
        );
    }
}
