//! Game orchestration
//!
//! The `GameSession` state machine and everything it talks to: output
//! events, rejections, stats, settings and the timer port.

mod events;
mod rejection;
mod scheduler;
mod session;
mod settings;
mod stats;

pub use events::GameEvent;
pub use rejection::GuessRejection;
pub use scheduler::{ScheduledTask, Scheduler, TimerId, TimerQueue};
pub use session::{
    GameSession, Outcome, Phase, SUCCESS_MESSAGES, Secret, SessionConfig, SessionState,
};
pub use settings::{SettingKey, Settings};
pub use stats::PlayerStats;

/// How-to-play text for the help screen
pub const HELP_TEXT: &[&str] = &[
    "Guess the NERDLE in 6 tries.",
    "Each guess must be a valid 5-letter word. Hit the enter button to submit.",
    "After each guess, the color of the tiles will change to show how close your guess was to the word.",
    "Green: the letter is in the word and in the correct spot.",
    "Yellow: the letter is in the word but in the wrong spot.",
    "Gray: the letter is not in the word in any spot.",
];
