//! Core domain types: words, the feedback rule, and the pattern codec.

mod feedback;
mod pattern;
mod word;
mod word_set;

pub use pattern::Pattern;
pub use word::{Word, WordError};
pub use word_set::{WordIndex, WordSet};
