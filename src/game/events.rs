//! Output events for the front-end

use super::Settings;
use crate::wordlists::WordListVariant;
use serde::Serialize;

/// Something the front-end should react to
///
/// Every mutating `GameSession` call returns the events it produced, in
/// order. The front-end reads the new state from the session's accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum GameEvent {
    GridChanged,
    KeyHintsChanged,
    /// Transient user-facing message
    Popup(String),
    GameFinished { won: bool, attempts: usize },
    StatsChanged,
    /// The delayed end-of-game summary is due
    SummaryReady,
    SettingsChanged(Settings),
    /// Load this corpus and hand it to `GameSession::load_corpus`
    CorpusRequested(WordListVariant),
}

impl GameEvent {
    /// Popup text, if this is a popup
    #[must_use]
    pub fn popup(&self) -> Option<&str> {
        match self {
            Self::Popup(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(GameEvent::GameFinished {
            won: true,
            attempts: 3,
        })
        .unwrap();
        assert_eq!(json["type"], "gameFinished");
        assert_eq!(json["data"]["attempts"], 3);

        let json = serde_json::to_value(GameEvent::Popup("Genius".into())).unwrap();
        assert_eq!(json["data"], "Genius");
    }
}
