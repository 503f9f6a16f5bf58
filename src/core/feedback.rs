//! Feedback computation: the Wordle scoring rule with duplicate-letter handling.
//!
//! Pulled out of `Pattern` so the codec (encode/decode of a `PatternCode`) and the
//! scoring algorithm (this module) are separately testable components, as the two
//! are conceptually distinct even though `Pattern::calculate` is the common entry point.

use super::{Pattern, Word};

/// Compute the feedback pattern produced when `guess` is played against `answer`.
///
/// Two-pass algorithm:
/// 1. Green pass: exact position matches consume one copy of that letter from `answer`.
/// 2. Yellow pass: remaining guess letters claim a leftover, unconsumed copy in `answer`.
///
/// A repeated letter in `guess` can only earn as many Green+Yellow trits as there are
/// remaining copies in `answer`; greens always claim before yellows.
#[must_use]
pub fn compute(guess: &Word, answer: &Word) -> Pattern {
    let mut trits = [0u8; 5];
    let mut remaining = *answer.counts();

    for i in 0..5 {
        if guess.char_at(i) == answer.char_at(i) {
            trits[i] = 2;
            let idx = (guess.char_at(i) - b'a') as usize;
            remaining[idx] = remaining[idx].saturating_sub(1);
        }
    }

    for i in 0..5 {
        if trits[i] != 0 {
            continue;
        }
        let idx = (guess.char_at(i) - b'a') as usize;
        if remaining[idx] > 0 {
            trits[i] = 1;
            remaining[idx] -= 1;
        }
    }

    Pattern::from_trits(trits)
}
