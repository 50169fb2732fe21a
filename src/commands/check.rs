//! Classify a single guess against a known secret

use crate::core::{Feedback, Word, WordError, classify};
use crate::wordlists::WordList;

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
    /// Whether the guess is in the active corpus
    pub in_word_list: bool,
}

/// Classify `guess` against `secret`
///
/// Classification does not require dictionary words; membership is only
/// reported.
///
/// # Errors
///
/// Returns `WordError` if either input is not a 5-letter word.
///
/// # Examples
/// ```
/// use nerdle::commands::check_word;
/// use nerdle::core::LetterStatus;
/// use nerdle::wordlists::{WordListVariant, loader::load_variant};
///
/// let corpus = load_variant(WordListVariant::Full).unwrap();
/// let result = check_word("crane", "crane", &corpus).unwrap();
/// assert!(result.feedback.is_perfect());
/// assert!(result.in_word_list);
/// ```
pub fn check_word(secret: &str, guess: &str, corpus: &WordList) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = classify(&secret, &guess);

    Ok(CheckResult {
        in_word_list: corpus.contains(&guess),
        secret,
        guess,
        feedback,
    })
}
