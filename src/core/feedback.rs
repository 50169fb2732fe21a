//! Guess classification
//!
//! Computes the per-letter feedback for one guess against one secret word,
//! using the standard two-pass rules for duplicate letters.

use super::{LetterStatus, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Feedback for a complete guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

/// Classify `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact position matches as Correct and remove them
///    from the pool of available secret letters
/// 2. Second pass: left to right, mark a remaining letter Present while the
///    pool still holds an unconsumed copy of it, otherwise Absent
///
/// When the guess repeats a letter more often than the secret does, the
/// leftmost non-Correct copies win the Present marks.
///
/// # Examples
/// ```
/// use nerdle::core::{LetterStatus::*, Word, classify};
///
/// let secret = Word::new("abate").unwrap();
/// let guess = Word::new("allot").unwrap();
///
/// let feedback = classify(&secret, &guess);
/// assert_eq!(feedback.statuses(), &[Correct, Absent, Absent, Absent, Present]);
/// ```
#[must_use]
pub fn classify(secret: &Word, guess: &Word) -> Feedback {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut available = secret.letter_counts();

    // First pass: exact matches
    // Allow: Index needed to access guess[i], secret[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.chars()[i] == secret.chars()[i] {
            result[i] = LetterStatus::Correct;

            if let Some(count) = available.get_mut(&guess.chars()[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, consumed left to right
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterStatus::Correct {
            continue;
        }

        if let Some(count) = available.get_mut(&guess.chars()[i])
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}

impl Feedback {
    /// Build feedback from explicit statuses
    #[inline]
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// The status at each position
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterStatus::{Absent, Correct, Present};
    use super::*;

    fn run(secret: &str, guess: &str) -> [LetterStatus; WORD_LENGTH] {
        *classify(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).statuses()
    }

    #[test]
    fn exact_match_is_perfect() {
        let feedback = classify(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn no_shared_letters_all_absent() {
        assert_eq!(run("fghij", "abcde"), [Absent; 5]);
    }

    #[test]
    fn misplaced_trailing_letter_is_present() {
        // ABATE has one T at index 3; ALLOT's T sits at index 4
        assert_eq!(
            run("abate", "allot"),
            [Correct, Absent, Absent, Absent, Present]
        );
    }

    #[test]
    fn duplicate_letters_against_triple_r() {
        // ERROR: E R R O R. ROBOT's O is consumed by the exact match at index 3,
        // so the earlier O gets nothing; R finds three unconsumed Rs.
        assert_eq!(
            run("error", "robot"),
            [Present, Absent, Absent, Correct, Absent]
        );
    }

    #[test]
    fn extra_copies_beyond_secret_count_are_absent() {
        // SPEED vs ERASE: two Es in each, both misplaced
        assert_eq!(
            run("erase", "speed"),
            [Present, Absent, Present, Present, Absent]
        );
        // One L in the secret, three in the guess, none in place
        assert_eq!(
            run("plank", "lolly"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn correct_match_consumes_before_present() {
        // FLOOR vs ROBOT: second O is exact, first O still finds a spare O
        assert_eq!(
            run("floor", "robot"),
            [Present, Present, Absent, Correct, Absent]
        );
        // ABBEY vs BOBBY: exact B at 2, one spare B for the leftmost
        assert_eq!(
            run("abbey", "bobby"),
            [Present, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn letter_budget_matches_secret_counts() {
        let pairs = [
            ("error", "robot"),
            ("abate", "allot"),
            ("erase", "speed"),
            ("geese", "eerie"),
            ("llama", "lilac"),
            ("mamma", "agama"),
        ];

        for (secret, guess) in pairs {
            let secret = Word::new(secret).unwrap();
            let guess = Word::new(guess).unwrap();
            let feedback = classify(&secret, &guess);

            for letter in 'A'..='Z' {
                let in_secret = secret.letters().filter(|&c| c == letter).count();
                let in_guess = guess.letters().filter(|&c| c == letter).count();
                let marked = guess
                    .letters()
                    .zip(feedback.iter())
                    .filter(|&(c, s)| c == letter && matches!(s, Correct | Present))
                    .count();
                assert_eq!(marked, in_secret.min(in_guess), "{secret} / {guess} / {letter}");
            }
        }
    }

    #[test]
    fn classification_is_repeatable() {
        let secret = Word::new("error").unwrap();
        let guess = Word::new("robot").unwrap();
        assert_eq!(classify(&secret, &guess), classify(&secret, &guess));
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::new([Correct, Present, Absent, Correct, Present]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
