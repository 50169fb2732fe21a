//! Color themes
//!
//! A theme is a plain record picked from the dark-mode and high-contrast
//! settings; nothing dispatches on it.

use crate::core::LetterStatus;
use crate::game::Settings;
use ratatui::style::Color;

/// Tile colors for classified letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: Color,
    pub present: Color,
    pub absent: Color,
}

const NORMAL: Palette = Palette {
    correct: Color::Rgb(0x4a, 0xf3, 0x4a),
    present: Color::Rgb(0xee, 0xdd, 0x20),
    absent: Color::Rgb(0x7e, 0x7d, 0x7d),
};

const NORMAL_DARK: Palette = Palette {
    correct: Color::Rgb(0x53, 0x8d, 0x4e),
    present: Color::Rgb(0xb5, 0x9f, 0x3b),
    absent: Color::Rgb(0x3a, 0x3a, 0x3c),
};

const HIGH_CONTRAST: Palette = Palette {
    correct: Color::Rgb(0xf1, 0x75, 0x10),
    present: Color::Rgb(0x33, 0x9a, 0xef),
    absent: Color::Rgb(0x7e, 0x7d, 0x7d),
};

const HIGH_CONTRAST_DARK: Palette = Palette {
    absent: Color::Rgb(0x3a, 0x3a, 0x3c),
    ..HIGH_CONTRAST
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// Border of cells that have no status yet
    pub empty: Color,
    pub palette: Palette,
}

impl Theme {
    #[must_use]
    pub const fn new(dark: bool, high_contrast: bool) -> Self {
        let palette = match (dark, high_contrast) {
            (false, false) => NORMAL,
            (true, false) => NORMAL_DARK,
            (false, true) => HIGH_CONTRAST,
            (true, true) => HIGH_CONTRAST_DARK,
        };

        if dark {
            Self {
                background: Color::Rgb(0x12, 0x12, 0x13),
                text: Color::White,
                empty: Color::Rgb(0x6c, 0x6c, 0x6c),
                palette,
            }
        } else {
            Self {
                background: Color::White,
                text: Color::Black,
                empty: Color::Rgb(0xd3, 0xd3, 0xd3),
                palette,
            }
        }
    }

    #[must_use]
    pub const fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.dark_mode, settings.high_contrast_mode)
    }

    /// Fill color for a tile or key; `None` leaves the background
    #[must_use]
    pub const fn fill(&self, status: LetterStatus) -> Option<Color> {
        match status {
            LetterStatus::Correct => Some(self.palette.correct),
            LetterStatus::Present => Some(self.palette.present),
            LetterStatus::Absent => Some(self.palette.absent),
            LetterStatus::Empty => None,
        }
    }
}
