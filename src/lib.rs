//! Wordle assistive solver
//!
//! Given a history of prior guesses and their per-position feedback, recommends
//! the next guess that minimizes the expected number of guesses remaining.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_core_solver::core::{Word, Pattern};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! // Calculate pattern
//! let pattern = Pattern::calculate(&guess, &answer);
//! println!("Pattern value: {}", pattern.value());
//! ```

// Core domain types
pub mod core;

// Solving algorithms and the session façade
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
