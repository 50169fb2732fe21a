//! NERDLE
//!
//! A five-letter word guessing game: six tries, per-letter feedback, keyboard
//! hints, hard mode and a daily puzzle.
//!
//! # Quick Start
//!
//! ```rust
//! use nerdle::core::{LetterStatus, Word, classify};
//!
//! let secret = Word::new("error").unwrap();
//! let guess = Word::new("robot").unwrap();
//!
//! let feedback = classify(&secret, &guess);
//! assert_eq!(feedback.statuses()[3], LetterStatus::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists and secret selection
pub mod wordlists;

// Game session state machine
pub mod game;

// Persistence port and backends
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod logging;
