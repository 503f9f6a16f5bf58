//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Unlike the lenient embedded path (trusted, validated once at release time),
//! files loaded at runtime are held to the external file format: blank lines and
//! `#`-comment lines are ignored, but any other line that is not five ASCII
//! letters, or that duplicates an earlier line, is a hard error.

use crate::core::{Word, WordSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A custom word-list file failed the external format contract.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// Line `line` is not five ASCII letters.
    Malformed { line: usize, text: String },
    /// Line `line` repeats a word already seen earlier in the file.
    Duplicate { line: usize, word: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
            Self::Malformed { line, text } => {
                write!(f, "line {line}: '{text}' is not five ASCII letters")
            }
            Self::Duplicate { line, word } => {
                write!(f, "line {line}: '{word}' is a duplicate")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load a `WordSet` from a custom word-list file, enforcing the external format.
///
/// Blank lines and lines starting with `#` are skipped. Every other line must be
/// exactly five ASCII letters (case-insensitive) and must not repeat an earlier
/// entry in the same file.
///
/// # Errors
/// [`LoadError::Io`] if the file cannot be read, [`LoadError::Malformed`] for a
/// line that is not five ASCII letters, [`LoadError::Duplicate`] for a repeated word.
pub fn load_wordset_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet, LoadError> {
    let content = fs::read_to_string(path)?;
    let mut seen = std::collections::HashSet::new();
    let mut words = Vec::new();

    for (offset, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let word = Word::new(line).map_err(|_| LoadError::Malformed {
            line: offset + 1,
            text: line.to_string(),
        })?;

        if !seen.insert(word.text().to_string()) {
            return Err(LoadError::Duplicate {
                line: offset + 1,
                word: word.text().to_string(),
            });
        }

        words.push(word.text().to_string());
    }

    Ok(WordSet::from_strs(words))
}

/// Convert an embedded string slice to a `WordSet`, skipping invalid entries
/// leniently (the embedded lists are trusted and validated once at build time).
#[must_use]
pub fn wordset_from_slice(slice: &[&str]) -> WordSet {
    WordSet::from_strs(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn wordset_from_slice_skips_invalid() {
        let set = wordset_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("crane"));
        assert!(set.contains("slate"));
    }

    #[test]
    fn wordset_from_slice_empty() {
        let set = wordset_from_slice(&[]);
        assert!(set.is_empty());
    }

    #[test]
    fn wordset_from_embedded_answers() {
        use crate::wordlists::ANSWERS;
        let set = wordset_from_slice(ANSWERS);
        assert_eq!(set.len(), ANSWERS.len());
    }

    fn write_temp(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "wordle_core_solver_test_{:?}.txt",
            std::thread::current().id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_ignoring_blank_and_comment_lines() {
        let path = write_temp("# comment\ncrane\n\nslate\n");
        let set = load_wordset_from_file(&path).unwrap();
        assert_eq!(set.len(), 2);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_malformed_line() {
        let path = write_temp("crane\nabc\n");
        let err = load_wordset_from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_duplicate_line() {
        let path = write_temp("crane\nCRANE\n");
        let err = load_wordset_from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Duplicate { line: 2, .. }));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_wordset_from_file("/nonexistent/path/to/nowhere.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
