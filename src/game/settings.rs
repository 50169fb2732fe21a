//! Persisted player settings

use crate::wordlists::WordListVariant;
use serde::{Deserialize, Serialize};

/// The five boolean preferences, stored as one JSON record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub hard_mode: bool,
    pub dark_mode: bool,
    pub high_contrast_mode: bool,
    #[serde(rename = "dailyNerdle")]
    pub daily_mode: bool,
    pub wordle_wordlist: bool,
}

/// A single toggle in `Settings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKey {
    HardMode,
    DarkMode,
    HighContrastMode,
    DailyMode,
    WordleWordlist,
}

impl SettingKey {
    /// Every key, in settings-screen order
    pub const ALL: [Self; 5] = [
        Self::HardMode,
        Self::DarkMode,
        Self::HighContrastMode,
        Self::DailyMode,
        Self::WordleWordlist,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HardMode => "Hard Mode",
            Self::DarkMode => "Dark Mode",
            Self::HighContrastMode => "High Contrast Mode",
            Self::DailyMode => "Daily Nerdle",
            Self::WordleWordlist => "Wordle Wordlist",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::HardMode => "Any revealed hints must be used in subsequent guesses",
            Self::DarkMode => "Turn the lights off",
            Self::HighContrastMode => "For improved color vision",
            Self::DailyMode => "Solve one puzzle per day, resets at midnight",
            Self::WordleWordlist => "Use the Wordle wordlist, otherwise use a larger wordlist",
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::HardMode => self.hard_mode,
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::HighContrastMode => self.high_contrast_mode,
            SettingKey::DailyMode => self.daily_mode,
            SettingKey::WordleWordlist => self.wordle_wordlist,
        }
    }

    /// A copy with one flag changed
    #[must_use]
    pub const fn with(mut self, key: SettingKey, value: bool) -> Self {
        match key {
            SettingKey::HardMode => self.hard_mode = value,
            SettingKey::DarkMode => self.dark_mode = value,
            SettingKey::HighContrastMode => self.high_contrast_mode = value,
            SettingKey::DailyMode => self.daily_mode = value,
            SettingKey::WordleWordlist => self.wordle_wordlist = value,
        }
        self
    }

    /// Corpus selected by these settings
    #[must_use]
    pub const fn word_list_variant(&self) -> WordListVariant {
        WordListVariant::from_flag(self.wordle_wordlist)
    }
}
