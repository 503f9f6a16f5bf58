//! Word lists for Wordle solving
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! plus a runtime loader for custom files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();
        for &answer in ANSWERS {
            assert!(
                allowed_set.contains(&answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn lists_are_non_trivial() {
        // Sanity-check against accidental truncation rather than pinning an exact
        // count, since this crate's embedded sample is a curated subset of the
        // real game's ~2,300/~12,000 word lists.
        assert!(ANSWERS_COUNT > 100, "answer list looks too small");
        assert!(ALLOWED_COUNT >= ANSWERS_COUNT, "allowed must cover answers");
    }
}
