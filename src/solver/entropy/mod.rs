//! Information-theoretic scoring of candidate guesses.

mod calculator;

pub use calculator::{score, score_all, GuessScore};
