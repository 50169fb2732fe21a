//! The guess board
//!
//! `MAX_ATTEMPTS` rows of `WORD_LENGTH` cells. Typing mutates the current row
//! in place; classification produces a new grid value.

use super::{Feedback, LetterStatus, MAX_ATTEMPTS, WORD_LENGTH, Word, classify};
use serde::{Deserialize, Serialize};

/// One tile on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCell {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

/// One guess row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: [LetterCell; WORD_LENGTH],
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[LetterCell; WORD_LENGTH] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub const fn cell(&self, position: usize) -> LetterCell {
        self.cells[position]
    }

    /// Every cell carries an uppercase letter and a classified status
    #[must_use]
    pub fn is_classified(&self) -> bool {
        self.cells.iter().all(|c| {
            c.letter.is_some_and(|l| l.is_ascii_uppercase()) && c.status.is_classified()
        })
    }

    /// No letters and no statuses
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == LetterCell::default())
    }

    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.cells.iter().all(|c| c.status == LetterStatus::Correct)
    }

    /// The typed word, if every cell holds a letter
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.cells.iter().map(|c| c.letter).collect()
    }

    /// Letters typed so far, left to right
    #[must_use]
    pub fn typed(&self) -> String {
        self.cells.iter().map_while(|c| c.letter).collect()
    }

    /// Statuses of a classified row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        if !self.is_classified() {
            return None;
        }
        let mut statuses = [LetterStatus::Empty; WORD_LENGTH];
        for (slot, cell) in statuses.iter_mut().zip(&self.cells) {
            *slot = cell.status;
        }
        Some(Feedback::new(statuses))
    }

    /// `(letter, status)` pairs for every filled cell
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.cells
            .iter()
            .filter_map(|c| c.letter.map(|l| (l, c.status)))
    }

    /// A classified row for `word`
    #[must_use]
    pub fn classified(word: &Word, feedback: &Feedback) -> Self {
        let mut row = Self::default();
        for (i, (letter, status)) in word.letters().zip(feedback.iter()).enumerate() {
            row.cells[i] = LetterCell {
                letter: Some(letter),
                status,
            };
        }
        row
    }
}

/// The whole board, one row per attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessGrid {
    rows: [Row; MAX_ATTEMPTS],
}

impl GuessGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// # Panics
    /// Panics if `attempt >= MAX_ATTEMPTS`
    #[inline]
    #[must_use]
    pub const fn row(&self, attempt: usize) -> &Row {
        &self.rows[attempt]
    }

    /// Rows before `attempt`
    #[must_use]
    pub fn rows_before(&self, attempt: usize) -> &[Row] {
        &self.rows[..attempt.min(MAX_ATTEMPTS)]
    }

    pub(crate) fn set_letter(&mut self, attempt: usize, position: usize, letter: char) {
        self.rows[attempt].cells[position] = LetterCell {
            letter: Some(letter),
            status: LetterStatus::Empty,
        };
    }

    pub(crate) fn clear_letter(&mut self, attempt: usize, position: usize) {
        self.rows[attempt].cells[position] = LetterCell::default();
    }

    /// A copy of this grid with row `attempt` replaced by the classified guess
    #[must_use]
    pub fn with_classified_row(&self, attempt: usize, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.rows[attempt] = Row::classified(guess, feedback);
        next
    }

    /// Number of leading classified rows
    #[must_use]
    pub fn classified_count(&self) -> usize {
        self.rows.iter().take_while(|r| r.is_classified()).count()
    }

    /// Index of the first all-Correct row
    #[must_use]
    pub fn winning_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .take_while(|r| r.is_classified())
            .position(Row::is_all_correct)
    }

    /// Classified rows form a prefix and everything after them is blank
    #[must_use]
    pub fn is_settled(&self) -> bool {
        let classified = self.classified_count();
        self.rows[classified..].iter().all(Row::is_blank)
    }

    /// Each classified row matches what `secret` would produce for it
    #[must_use]
    pub fn agrees_with(&self, secret: &Word) -> bool {
        self.rows
            .iter()
            .take_while(|r| r.is_classified())
            .all(|row| {
                let Some(guess) = row.text().and_then(|t| Word::new(t).ok()) else {
                    return false;
                };
                row.feedback() == Some(classify(secret, &guess))
            })
    }
}
