//! Word lists for the puzzle
//!
//! Two corpora are compiled into the binary: the full list and the smaller
//! Wordle list. A `WordList` is an ordered, de-duplicated-on-lookup corpus;
//! the position of a word is what daily selection indexes into.

mod embedded;
pub mod loader;
pub mod selection;

pub use embedded::{FULL_WORDS, FULL_WORDS_COUNT, WORDLE_WORDS, WORDLE_WORDS_COUNT};
pub use selection::{
    Clock, DailyPolicy, DailySchedule, FixedClock, SelectionError, SelectionMode, SystemClock,
    select_secret,
};

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors while building a corpus
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list contains no valid words")]
    Empty,
}

/// Which embedded corpus to play with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordListVariant {
    /// The larger list
    #[default]
    Full,
    /// The classic Wordle answer list
    Wordle,
}

impl WordListVariant {
    /// Variant selected by the "use the Wordle word list" setting
    #[must_use]
    pub const fn from_flag(use_wordle: bool) -> Self {
        if use_wordle { Self::Wordle } else { Self::Full }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Wordle => "wordle",
        }
    }
}

impl fmt::Display for WordListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An ordered corpus of valid words with constant-time membership
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build a corpus, keeping the given order
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use nerdle::core::Word;
    /// use nerdle::wordlists::WordList;
    ///
    /// let corpus = WordList::new(vec![Word::new("crane").unwrap()]).unwrap();
    /// assert!(corpus.contains(&Word::new("CRANE").unwrap()));
    /// assert!(WordList::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let index = words.iter().map(|w| *w.chars()).collect();
        Ok(Self { words, index })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_count_matches_const() {
        assert_eq!(FULL_WORDS.len(), FULL_WORDS_COUNT);
    }

    #[test]
    fn wordle_count_matches_const() {
        assert_eq!(WORDLE_WORDS.len(), WORDLE_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in FULL_WORDS.iter().chain(WORDLE_WORDS) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn wordle_subset_of_full() {
        let full: FxHashSet<&str> = FULL_WORDS.iter().copied().collect();
        for &word in WORDLE_WORDS {
            assert!(full.contains(word), "Wordle word '{word}' not in full list");
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(FULL_WORDS_COUNT, 2378);
        assert_eq!(WORDLE_WORDS_COUNT, 2250);
    }

    #[test]
    fn variant_from_flag() {
        assert_eq!(WordListVariant::from_flag(true), WordListVariant::Wordle);
        assert_eq!(WordListVariant::from_flag(false), WordListVariant::Full);
        assert_eq!(WordListVariant::Wordle.to_string(), "wordle");
    }

    #[test]
    fn get_and_contains() {
        let words = loader::words_from_slice(&["crane", "slate", "crane"]);
        let corpus = WordList::new(words).unwrap();

        let slate = Word::new("slate").unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(1), Some(&slate));
        assert_eq!(corpus.get(3), None);
        assert!(!corpus.contains(&Word::new("robot").unwrap()));
    }
}
