//! Hard mode rules
//!
//! Once a letter has been revealed, later guesses must use it: a Correct
//! letter stays in its position and a Present letter appears somewhere.

use super::{LetterStatus, Row, Word};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A 1-based position rendered as "1st", "2nd", "3rd", "4th", ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ordinal(pub usize);

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.0 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        write!(f, "{}{suffix}", self.0)
    }
}

/// Why a guess breaks hard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum HardModeViolation {
    #[error("{position} letter must be {letter}")]
    MisplacedCorrect { position: Ordinal, letter: char },
    #[error("Guess must contain {0}")]
    MissingPresent(char),
}

/// Check `candidate` against every previously classified row
///
/// Rows are scanned oldest first and the first row with a violation decides
/// the result. Within a row a Correct-position violation beats a missing
/// Present letter.
///
/// # Errors
/// Returns the first row's `HardModeViolation`.
///
/// # Examples
/// ```
/// use nerdle::core::{GuessGrid, Word, classify, hard_mode};
///
/// let secret = Word::new("abate").unwrap();
/// let first = Word::new("allot").unwrap();
/// let grid = GuessGrid::new().with_classified_row(0, &first, &classify(&secret, &first));
///
/// let err = hard_mode::validate(grid.rows_before(1), &Word::new("crate").unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "1st letter must be A");
/// ```
pub fn validate(prior_rows: &[Row], candidate: &Word) -> Result<(), HardModeViolation> {
    for row in prior_rows.iter().filter(|r| r.is_classified()) {
        if let Some(violation) = check_row(row, candidate) {
            return Err(violation);
        }
    }
    Ok(())
}

fn check_row(row: &Row, candidate: &Word) -> Option<HardModeViolation> {
    let mut missing = None;

    for (index, (letter, status)) in row.letters().enumerate() {
        match status {
            LetterStatus::Correct if candidate.letter_at(index) != letter => {
                return Some(HardModeViolation::MisplacedCorrect {
                    position: Ordinal(index + 1),
                    letter,
                });
            }
            // Keep scanning: a later Correct violation in this row takes precedence
            LetterStatus::Present if !candidate.contains(letter) => {
                missing = Some(HardModeViolation::MissingPresent(letter));
            }
            _ => {}
        }
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessGrid, classify};

    fn board(secret: &str, guesses: &[&str]) -> GuessGrid {
        let secret = Word::new(secret).unwrap();
        guesses.iter().enumerate().fold(GuessGrid::new(), |grid, (i, g)| {
            let guess = Word::new(*g).unwrap();
            grid.with_classified_row(i, &guess, &classify(&secret, &guess))
        })
    }

    fn check(grid: &GuessGrid, candidate: &str) -> Result<(), HardModeViolation> {
        validate(
            grid.rows_before(grid.classified_count()),
            &Word::new(candidate).unwrap(),
        )
    }

    #[test]
    fn ordinal_suffixes() {
        let rendered: Vec<String> = (1..=5).map(|n| Ordinal(n).to_string()).collect();
        assert_eq!(rendered, ["1st", "2nd", "3rd", "4th", "5th"]);
    }

    #[test]
    fn no_prior_rows_is_ok() {
        assert_eq!(check(&GuessGrid::new(), "crane"), Ok(()));
    }

    #[test]
    fn correct_letter_must_stay() {
        let grid = board("abate", &["allot"]);
        assert_eq!(
            check(&grid, "crate").unwrap_err().to_string(),
            "1st letter must be A"
        );
    }

    #[test]
    fn present_letter_must_appear() {
        // ALLOT vs ABATE leaves T present
        let grid = board("abate", &["allot"]);
        assert_eq!(
            check(&grid, "abide"),
            Err(HardModeViolation::MissingPresent('T'))
        );
        assert_eq!(check(&grid, "after"), Ok(()));
    }

    #[test]
    fn correct_violation_beats_present_in_same_row() {
        // SLATE vs STALE: S correct, L/T present, A correct, E correct
        let grid = board("stale", &["slate"]);
        // Keeps every green but drops L and T: the last missing letter is reported
        assert_eq!(
            check(&grid, "shame").unwrap_err().to_string(),
            "Guess must contain T"
        );
        // Drops L before it breaks the green A: the green wins
        assert_eq!(
            check(&grid, "sauce").unwrap_err().to_string(),
            "3rd letter must be A"
        );
    }

    #[test]
    fn earliest_row_wins() {
        // Row 1: CRANE vs BRINE -> R, N, E correct. Row 2: BRINK -> B, R, I, N correct
        let grid = board("brine", &["crane", "brink"]);
        // Candidate keeps row 2's B but drops row 1's E
        assert_eq!(
            check(&grid, "brins").unwrap_err().to_string(),
            "5th letter must be E"
        );
    }

    #[test]
    fn satisfying_candidate_passes() {
        let grid = board("brine", &["crane", "brink"]);
        assert_eq!(check(&grid, "brine"), Ok(()));
    }

    #[test]
    fn unclassified_rows_are_ignored() {
        let grid = board("abate", &["allot"]);
        assert_eq!(
            validate(grid.rows(), &Word::new("after").unwrap()),
            Ok(())
        );
    }
}
