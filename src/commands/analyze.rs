//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific guess against a
//! candidate set.

use crate::core::{Word, WordSet};
use crate::solver::entropy;

/// Result of analyzing a word.
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_bucket: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of `word` against `candidates`, requiring that `word`
/// appear in `guess_list`.
///
/// # Errors
/// Returns an error if the word is not five ASCII letters, or is not a member
/// of `guess_list`.
pub fn analyze_word(
    word: &str,
    guess_list: &WordSet,
    candidates: &[Word],
) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !guess_list.contains(word_obj.text()) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let candidate_refs: Vec<&Word> = candidates.iter().collect();
    let score = entropy::score(&word_obj, &candidate_refs);

    let total_candidates = candidates.len();
    let expected_reduction = score.entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction.max(1.0);

    Ok(AnalysisResult {
        word: word.to_string(),
        entropy: score.entropy,
        expected_reduction,
        expected_remaining,
        worst_bucket: score.worst_bucket,
        total_candidates,
    })
}
