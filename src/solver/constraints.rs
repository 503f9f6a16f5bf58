//! Compiled projection of a guess/pattern history into an O(1)-per-letter admission test.

use crate::core::{Pattern, Word};

const UNBOUNDED: u8 = 5;

/// A guess/pattern observation contradicts an earlier one, or rules out every word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inconsistent;

impl std::fmt::Display for Inconsistent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "observation is inconsistent with prior constraints")
    }
}

impl std::error::Error for Inconsistent {}

/// The conjunction of every (guess, pattern) observation compiled into four dense fields,
/// checked in O(1) per letter by [`ConstraintSet::admits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    green: [Option<u8>; 5],
    forbidden: [u32; 5],
    min_count: [u8; 26],
    max_count: [u8; 26],
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            green: [None; 5],
            forbidden: [0; 5],
            min_count: [0; 26],
            max_count: [UNBOUNDED; 26],
        }
    }
}

impl ConstraintSet {
    /// The empty constraint set: every word is admitted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one more observation into a new, independent `ConstraintSet`.
    ///
    /// `self` is left untouched, which is what lets callers implement a transactional
    /// "observe": compile into a scratch value and commit only on `Ok`.
    ///
    /// # Errors
    /// Returns [`Inconsistent`] if the observation contradicts an existing Green, or
    /// if the resulting bounds would require `min_count[letter] > max_count[letter]`.
    pub fn with_observation(&self, guess: &Word, pattern: Pattern) -> Result<Self, Inconsistent> {
        let mut next = self.clone();
        let trits = pattern.to_trits();
        let mut tally = [0u8; 26];
        let mut any_gray = [false; 26];

        for i in 0..5 {
            let letter = guess.char_at(i);
            let idx = (letter - b'a') as usize;
            match trits[i] {
                2 => {
                    if let Some(existing) = next.green[i] {
                        if existing != letter {
                            return Err(Inconsistent);
                        }
                    }
                    next.green[i] = Some(letter);
                    tally[idx] += 1;
                }
                1 => {
                    next.forbidden[i] |= 1 << idx;
                    tally[idx] += 1;
                }
                _ => {
                    next.forbidden[i] |= 1 << idx;
                    any_gray[idx] = true;
                }
            }
        }

        for idx in 0..26 {
            if tally[idx] > 0 {
                next.min_count[idx] = next.min_count[idx].max(tally[idx]);
            }
            if any_gray[idx] {
                next.max_count[idx] = next.max_count[idx].min(tally[idx]);
            }
            if next.min_count[idx] > next.max_count[idx] {
                return Err(Inconsistent);
            }
        }

        Ok(next)
    }

    /// Does `word` satisfy every compiled constraint?
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        for i in 0..5 {
            let letter = word.char_at(i);
            match self.green[i] {
                Some(required) if required != letter => return false,
                None => {
                    let idx = (letter - b'a') as usize;
                    if self.forbidden[i] & (1 << idx) != 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }

        for idx in 0..26 {
            let count = word.count_of(b'a' + idx as u8);
            if count < self.min_count[idx] || count > self.max_count[idx] {
                return false;
            }
        }

        true
    }

    /// Retain admitted words from `words`, preserving order.
    #[must_use]
    pub fn filter<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.iter().filter(|w| self.admits(w)).collect()
    }
}
