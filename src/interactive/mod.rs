//! Interactive TUI interface
//!
//! Feeds key presses to a `GameSession` and redraws from its state.

mod app;
mod rendering;
mod theme;

pub use app::{App, Modal, Popup, run_tui};
pub use theme::{Palette, Theme};
