//! Interning arena for `Word`s
//!
//! Builds a dense index space over a word list so later lookups by text are O(1)
//! instead of the linear `iter().find(...)` scans a naive `Vec<Word>` would require.

use super::Word;
use rustc_hash::FxHashMap;

/// Index of a word within a `WordSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordIndex(u32);

impl WordIndex {
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// An interned, indexable collection of words with O(1) text lookup.
#[derive(Debug, Default)]
pub struct WordSet {
    words: Vec<Word>,
    by_text: FxHashMap<Box<str>, WordIndex>,
}

impl WordSet {
    /// Build a `WordSet` from raw candidate strings, skipping any that fail `Word::new`.
    ///
    /// Duplicate texts collapse to the first occurrence's index.
    #[must_use]
    pub fn from_strs<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for raw in words {
            if let Ok(word) = Word::new(raw.as_ref()) {
                set.intern(word);
            }
        }
        set
    }

    fn intern(&mut self, word: Word) -> WordIndex {
        if let Some(&idx) = self.by_text.get(word.text()) {
            return idx;
        }
        let idx = WordIndex(u32::try_from(self.words.len()).expect("word list too large"));
        self.by_text.insert(word.text().into(), idx);
        self.words.push(word);
        idx
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, idx: WordIndex) -> &Word {
        &self.words[idx.as_usize()]
    }

    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<WordIndex> {
        self.by_text.get(text).copied()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.by_text.contains_key(text)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Iterate words paired with their `WordIndex`, in interning order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (WordIndex, &Word)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordIndex(i as u32), w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_and_looks_up() {
        let set = WordSet::from_strs(["crane", "slate", "irate"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("crane"));
        let idx = set.index_of("slate").unwrap();
        assert_eq!(set.get(idx).text(), "slate");
    }

    #[test]
    fn skips_invalid_words() {
        let set = WordSet::from_strs(["crane", "toolong", "ab", "slate"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn deduplicates_by_text() {
        let set = WordSet::from_strs(["crane", "CRANE", "crane"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unknown_lookup_returns_none() {
        let set = WordSet::from_strs(["crane"]);
        assert!(set.index_of("zzzzz").is_none());
    }
}
