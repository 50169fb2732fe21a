//! Per-letter feedback status

use serde::{Deserialize, Serialize};

/// What is known about a letter, either in one cell or on one keyboard key
///
/// The declaration order is the knowledge order used by keyboard hints:
/// `Empty < Absent < Present < Correct`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LetterStatus {
    /// Not guessed yet
    #[default]
    Empty,
    /// Gray - letter not in the word
    Absent,
    /// Yellow - letter in the word, wrong position
    Present,
    /// Green - letter in the correct position
    Correct,
}

impl LetterStatus {
    /// True for any status produced by classification
    #[inline]
    #[must_use]
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Combine two statuses, keeping the more informative one
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Emoji square for share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '▫',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering() {
        assert!(LetterStatus::Empty < LetterStatus::Absent);
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
    }

    #[test]
    fn merge_never_downgrades() {
        assert_eq!(
            LetterStatus::Correct.merge(LetterStatus::Absent),
            LetterStatus::Correct
        );
        assert_eq!(
            LetterStatus::Present.merge(LetterStatus::Absent),
            LetterStatus::Present
        );
        assert_eq!(
            LetterStatus::Empty.merge(LetterStatus::Absent),
            LetterStatus::Absent
        );
    }

    #[test]
    fn classified_flag() {
        assert!(!LetterStatus::Empty.is_classified());
        assert!(LetterStatus::Absent.is_classified());
        assert!(LetterStatus::Correct.is_classified());
    }
}
