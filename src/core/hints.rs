//! Keyboard hint aggregation
//!
//! Tracks the best-known status of every key across all submitted guesses.

use super::{Feedback, GuessGrid, LetterStatus, Word};
use serde::{Deserialize, Serialize};

/// On-screen keyboard rows, top to bottom
pub const KEYBOARD_LAYOUT: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best-known status per letter A-Z
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHints {
    keys: [LetterStatus; 26],
}

impl KeyHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a key; anything outside A-Z reads as `Empty`
    #[must_use]
    pub fn get(&self, letter: char) -> LetterStatus {
        Self::slot(letter).map_or(LetterStatus::Empty, |i| self.keys[i])
    }

    /// Merge a guess result into the hints
    ///
    /// Each key keeps the maximum of its old and new status, so a Correct key
    /// never drops back to Present or Absent.
    ///
    /// # Examples
    /// ```
    /// use nerdle::core::{KeyHints, LetterStatus};
    ///
    /// let hints = KeyHints::new()
    ///     .update([('A', LetterStatus::Correct)])
    ///     .update([('A', LetterStatus::Absent)]);
    /// assert_eq!(hints.get('A'), LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn update<I>(mut self, result: I) -> Self
    where
        I: IntoIterator<Item = (char, LetterStatus)>,
    {
        for (letter, status) in result {
            if let Some(i) = Self::slot(letter) {
                self.keys[i] = self.keys[i].merge(status);
            }
        }
        self
    }

    /// Merge one classified guess
    #[must_use]
    pub fn with_guess(self, guess: &Word, feedback: &Feedback) -> Self {
        self.update(guess.letters().zip(feedback.iter()))
    }

    /// Rebuild hints from every classified row of a board
    #[must_use]
    pub fn from_grid(grid: &GuessGrid) -> Self {
        grid.rows()
            .iter()
            .filter(|row| row.is_classified())
            .fold(Self::new(), |hints, row| hints.update(row.letters()))
    }

    fn slot(letter: char) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| (letter.to_ascii_uppercase() as u8 - b'A') as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify;

    #[test]
    fn starts_empty() {
        let hints = KeyHints::new();
        for key in KEYBOARD_LAYOUT.iter().flat_map(|row| row.chars()) {
            assert_eq!(hints.get(key), LetterStatus::Empty);
        }
    }

    #[test]
    fn present_beats_absent_but_not_correct() {
        let hints = KeyHints::new()
            .update([('E', LetterStatus::Absent)])
            .update([('E', LetterStatus::Present)]);
        assert_eq!(hints.get('E'), LetterStatus::Present);

        let hints = hints
            .update([('E', LetterStatus::Correct)])
            .update([('E', LetterStatus::Present), ('E', LetterStatus::Absent)]);
        assert_eq!(hints.get('E'), LetterStatus::Correct);
    }

    #[test]
    fn correct_key_survives_inconsistent_absent() {
        let hints = KeyHints::new()
            .update([('R', LetterStatus::Correct)])
            .update([('R', LetterStatus::Absent)]);
        assert_eq!(hints.get('R'), LetterStatus::Correct);
    }

    #[test]
    fn duplicate_letter_in_one_guess_keeps_best() {
        // ROBOT vs ERROR: first O Absent, second O Correct
        let secret = Word::new("error").unwrap();
        let guess = Word::new("robot").unwrap();
        let hints = KeyHints::new().with_guess(&guess, &classify(&secret, &guess));

        assert_eq!(hints.get('O'), LetterStatus::Correct);
        assert_eq!(hints.get('R'), LetterStatus::Present);
        assert_eq!(hints.get('B'), LetterStatus::Absent);
        assert_eq!(hints.get('Z'), LetterStatus::Empty);
    }

    #[test]
    fn lowercase_and_symbols() {
        let hints = KeyHints::new().update([('q', LetterStatus::Absent), ('!', LetterStatus::Correct)]);
        assert_eq!(hints.get('Q'), LetterStatus::Absent);
        assert_eq!(hints.get('!'), LetterStatus::Empty);
    }

    #[test]
    fn rebuilt_from_grid() {
        let secret = Word::new("crane").unwrap();
        let first = Word::new("slate").unwrap();
        let second = Word::new("crane").unwrap();
        let grid = GuessGrid::new()
            .with_classified_row(0, &first, &classify(&secret, &first))
            .with_classified_row(1, &second, &classify(&secret, &second));

        let hints = KeyHints::from_grid(&grid);
        assert_eq!(hints.get('A'), LetterStatus::Correct);
        assert_eq!(hints.get('S'), LetterStatus::Absent);
        assert_eq!(hints.get('C'), LetterStatus::Correct);
    }
}
