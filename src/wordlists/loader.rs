//! Word list loading utilities
//!
//! Builds a `WordList` from a newline-delimited file, raw text, or one of
//! the embedded corpora.

use super::{FULL_WORDS, WORDLE_WORDS, WordList, WordListError, WordListVariant};
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a corpus from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use nerdle::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = parse(&content)?;
    info!(path = %path.display(), words = corpus.len(), "loaded word list file");
    Ok(corpus)
}

/// Parse newline-delimited corpus text
///
/// Blank lines and malformed entries are skipped; order is preserved.
///
/// # Errors
///
/// Returns `WordListError::Empty` if no line holds a valid word.
pub fn parse(content: &str) -> Result<WordList, WordListError> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!(skipped, "ignored malformed corpus lines");
    }

    WordList::new(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use nerdle::wordlists::loader::words_from_slice;
/// use nerdle::wordlists::WORDLE_WORDS;
///
/// let words = words_from_slice(WORDLE_WORDS);
/// assert_eq!(words.len(), WORDLE_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load one of the embedded corpora
///
/// # Errors
///
/// Returns `WordListError::Empty` if the embedded list has no valid words.
pub fn load_variant(variant: WordListVariant) -> Result<WordList, WordListError> {
    let slice = match variant {
        WordListVariant::Full => FULL_WORDS,
        WordListVariant::Wordle => WORDLE_WORDS,
    };
    WordList::new(words_from_slice(slice))
}

/// Load the corpus for `variant`, or the custom file when one is given
///
/// # Errors
///
/// Returns `WordListError` if the custom file cannot be read or no corpus
/// holds a valid word.
pub fn load_corpus(variant: WordListVariant, custom: Option<&Path>) -> Result<WordList, WordListError> {
    match custom {
        Some(path) => load_from_file(path),
        None => {
            let corpus = load_variant(variant)?;
            debug!(%variant, words = corpus.len(), "loaded embedded word list");
            Ok(corpus)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_keeps_order_and_skips_blanks() {
        let corpus = parse("CRANE\n\nslate\n  ROBOT  \nxx\n").unwrap();
        let texts: Vec<&str> = corpus.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "ROBOT"]);
    }

    #[test]
    fn parse_empty_is_error() {
        assert!(matches!(parse("\n\n"), Err(WordListError::Empty)));
        assert!(matches!(parse("abc\n12345\n"), Err(WordListError::Empty)));
    }

    #[test]
    fn load_from_file_reads_corpus() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CRANE\nSLATE\nERROR").unwrap();

        let corpus = load_from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert!(corpus.contains(&Word::new("error").unwrap()));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn embedded_variants_load() {
        let full = load_variant(WordListVariant::Full).unwrap();
        let wordle = load_variant(WordListVariant::Wordle).unwrap();

        assert_eq!(full.len(), FULL_WORDS.len());
        assert_eq!(wordle.len(), WORDLE_WORDS.len());
        assert!(full.len() > wordle.len());
    }

    #[test]
    fn custom_file_overrides_variant() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "FLOOR").unwrap();

        let corpus = load_corpus(WordListVariant::Wordle, Some(file.path())).unwrap();
        assert_eq!(corpus.len(), 1);

        let embedded = load_corpus(WordListVariant::Wordle, None).unwrap();
        assert_eq!(embedded.len(), WORDLE_WORDS.len());
    }
}
