//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{feedback, Word};

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Total number of distinct pattern values (3^5).
    pub const SPACE_SIZE: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Build a pattern from five trits (0=Gray, 1=Yellow, 2=Green), position 0 first.
    #[must_use]
    pub fn from_trits(trits: [u8; 5]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for digit in trits {
            pattern += digit * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Decompose into five trits (0=Gray, 1=Yellow, 2=Green), position 0 first.
    #[must_use]
    pub fn to_trits(self) -> [u8; 5] {
        let mut trits = [0u8; 5];
        let mut val = self.0;
        for t in &mut trits {
            *t = val % 3;
            val /= 3;
        }
        trits
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters. See [`feedback::compute`] for the algorithm.
    ///
    /// # Examples
    /// ```
    /// use wordle_core_solver::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        feedback::compute(guess, answer)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> u8 {
        self.to_trits().iter().filter(|&&d| d == 2).count() as u8
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> u8 {
        self.to_trits().iter().filter(|&&d| d == 1).count() as u8
    }

    /// Parse a pattern from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_core_solver::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut trits = [0u8; 5];
        for (slot, ch) in trits.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => 2,
                'Y' | 'y' | '🟨' => 1,
                '-' | '_' | '⬜' => 0,
                _ => return None,
            };
        }

        Some(Self::from_trits(trits))
    }

    /// Convert pattern to emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨" representing the pattern.
    ///
    /// # Examples
    /// ```
    /// use wordle_core_solver::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        let mut result = String::with_capacity(10); // 2 bytes per emoji
        for digit in self.to_trits() {
            result.push(match digit {
                2 => '🟩', // Green
                1 => '🟨', // Yellow
                _ => '⬜', // Gray
            });
        }
        result
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
        assert_eq!(Pattern::PERFECT.count_yellows(), 0);
    }

    #[test]
    fn pattern_all_gray() {
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("fghij").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.value(), 0);
        assert_eq!(pattern.count_greens(), 0);
        assert_eq!(pattern.count_yellows(), 0);
    }

    #[test]
    fn pattern_all_green() {
        let word = Word::new("crane").unwrap();
        let pattern = Pattern::calculate(&word, &word);

        assert_eq!(pattern, Pattern::PERFECT);
        assert_eq!(pattern.count_greens(), 5);
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.value(), 37);
        assert_eq!(pattern.count_greens(), 0);
        assert_eq!(pattern.count_yellows(), 3);
    }

    #[test]
    fn pattern_duplicate_letters_complex() {
        // ROBOT vs FLOOR
        let guess = Word::new("robot").unwrap();
        let answer = Word::new("floor").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.value(), 58);
        assert_eq!(pattern.count_greens(), 1);
        assert_eq!(pattern.count_yellows(), 2);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none());
        assert!(Pattern::from_str("GYG").is_none());
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
    }

    #[test]
    fn pattern_count_feedback() {
        let pattern = Pattern::new(133);

        assert_eq!(pattern.count_greens(), 2);
        assert_eq!(pattern.count_yellows(), 3);
    }

    #[test]
    fn pattern_trit_round_trip() {
        for raw in 0..243u8 {
            let p = Pattern::new(raw);
            assert_eq!(Pattern::from_trits(p.to_trits()), p);
        }
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_real_wordle_example() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("slate").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.value(), 180);
        assert_eq!(pattern.count_greens(), 2);
        assert_eq!(pattern.count_yellows(), 0);
    }
}
