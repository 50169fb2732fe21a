//! Core domain types for the puzzle
//!
//! Pure, deterministic building blocks: words, letter statuses, the guess
//! classifier, the board, keyboard hints and the hard-mode rules. Nothing in
//! here touches storage, time or randomness.

mod feedback;
mod grid;
pub mod hard_mode;
mod hints;
mod status;
mod word;

pub use feedback::{Feedback, classify};
pub use grid::{GuessGrid, LetterCell, Row};
pub use hard_mode::{HardModeViolation, Ordinal};
pub use hints::{KEYBOARD_LAYOUT, KeyHints};
pub use status::LetterStatus;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game
pub const MAX_ATTEMPTS: usize = 6;
