//! Formatting utilities for terminal output

use crate::core::{LetterStatus, Row};
use chrono::TimeDelta;
use colored::{ColoredString, Colorize};

/// Format a board row as emoji squares; unclassified cells are blank squares
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.cells().iter().map(|cell| cell.status.to_emoji()).collect()
}

/// One letter as a colored tile
#[must_use]
pub fn colored_tile(letter: Option<char>, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or(' '));
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Empty => text.normal(),
    }
}

/// A row as colored tiles separated by spaces
#[must_use]
pub fn format_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| colored_tile(cell.letter, cell.status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one win-distribution bucket, scaled to the largest bucket
#[must_use]
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    create_progress_bar(f64::from(count), f64::from(max), width)
}

/// `HH:MM:SS`, clamped at zero
#[must_use]
pub fn format_countdown(remaining: TimeDelta) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
