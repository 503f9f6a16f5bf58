//! Test all answers - comprehensive solver evaluation
//!
//! Runs the solver against every possible answer word and generates statistics.

use crate::solver::SolverCore;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::solve::{solve_word, SolveConfig};

/// Result from testing a single word.
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all words.
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_word: Option<(String, usize)>,
    pub worst_words: Vec<(String, usize)>,
    pub first_guess_used: HashMap<String, usize>,
}

/// Run the solver on every word in `answer_words` (or the first `limit` of them).
#[allow(clippy::too_many_lines)]
pub fn run_test_all(solver: &SolverCore, answer_words: &[String], limit: Option<usize>) -> TestAllStatistics {
    let test_words: Vec<&String> = answer_words
        .iter()
        .take(limit.unwrap_or(answer_words.len()))
        .collect();

    println!("Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::new();
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<String, usize> = HashMap::new();

    let total_start = Instant::now();

    for (idx, target) in test_words.iter().enumerate() {
        let config = SolveConfig::new((*target).clone());
        let outcome = solve_word(config, solver);

        let (guesses, success) = match outcome {
            Ok(result) => (
                result.guesses.iter().map(|g| g.word.clone()).collect::<Vec<_>>(),
                result.success,
            ),
            Err(_) => (Vec::new(), false),
        };

        if let Some(first) = guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }

        let num_guesses = guesses.len();
        results.push(WordTestResult {
            word: (*target).clone(),
            guesses,
            num_guesses,
            success,
        });

        if success {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }

        if idx % 10 == 0 && !results.is_empty() {
            let avg =
                results.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved_count = results.iter().filter(|r| r.success).count();
    let failed_count = results.len() - solved_count;

    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .max()
        .unwrap_or(0);

    let min_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .min()
        .unwrap_or(0);

    let best_word = results
        .iter()
        .filter(|r| r.success)
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.word.clone(), r.num_guesses));

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success)
        .filter(|r| r.num_guesses >= 5)
        .map(|r| (r.word.clone(), r.num_guesses))
        .collect();
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved_count,
        failed: failed_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        best_word,
        worst_words,
        first_guess_used,
    }
}

/// Print test-all statistics with the CLI's terminal formatting conventions.
#[allow(clippy::too_many_lines)]
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "=".repeat(70));
    println!(" Test Results ");
    println!("{}", "=".repeat(70));

    println!("\n{}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n{}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=6 {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if let Some((word, guesses)) = &stats.best_word {
        println!("\n{}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            word.to_uppercase().bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    println!("\nFirst Guess Usage");
    let mut first_guesses: Vec<(String, usize)> = stats
        .first_guess_used
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    first_guesses.sort_by_key(|(_, count)| std::cmp::Reverse(*count));

    for (word, count) in first_guesses.iter().take(5) {
        let percentage = *count as f64 / stats.total_words.max(1) as f64 * 100.0;
        println!(
            "  {}: {} times ({:.1}%)",
            word.to_uppercase(),
            count,
            percentage
        );
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
    fn test_all_runs_and_solves_most_words() {
        let solver = solver();
        let targets: Vec<String> = ANSWERS[..20].iter().map(|s| s.to_string()).collect();
        let stats = run_test_all(&solver, &targets, None);

        assert_eq!(stats.total_words, 20);
        assert!(stats.solved >= 18, "expected most of a 20-word sample to solve");
    }

    #[test]
    fn test_all_respects_limit() {
        let solver = solver();
        let targets: Vec<String> = ANSWERS.iter().map(|s| s.to_string()).collect();
        let stats = run_test_all(&solver, &targets, Some(5));
        assert_eq!(stats.total_words, 5);
    }

    #[test]
    fn guess_distribution_sums_to_solved_count() {
        let solver = solver();
        let targets: Vec<String> = ANSWERS[..15].iter().map(|s| s.to_string()).collect();
        let stats = run_test_all(&solver, &targets, None);
        let sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(sum, stats.solved);
    }
}
