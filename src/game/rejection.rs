//! Reasons a submitted guess is turned away

use crate::core::HardModeViolation;
use thiserror::Error;

/// A guess that was not accepted; the session state is unchanged
///
/// The `Display` text is the popup shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Word list not loaded")]
    CorpusNotReady,
    #[error("No puzzle available")]
    NoPuzzle,
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Not in word list")]
    NotInWordList,
    #[error(transparent)]
    HardMode(#[from] HardModeViolation),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ordinal;

    #[test]
    fn popup_texts() {
        assert_eq!(GuessRejection::NotEnoughLetters.to_string(), "Not enough letters");
        assert_eq!(GuessRejection::NotInWordList.to_string(), "Not in word list");

        let hard: GuessRejection = HardModeViolation::MisplacedCorrect {
            position: Ordinal(2),
            letter: 'R',
        }
        .into();
        assert_eq!(hard.to_string(), "2nd letter must be R");
    }
}
