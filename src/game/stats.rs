//! Player statistics across games

use crate::core::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// Lifetime results, updated once per finished game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerStats {
    pub played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins bucketed by number of guesses, 1 to `MAX_ATTEMPTS`
    pub win_distribution: [u32; MAX_ATTEMPTS],
}

impl PlayerStats {
    /// Record one finished game
    ///
    /// `attempts` is the 1-based number of guesses used; it is only read for
    /// wins.
    ///
    /// # Examples
    /// ```
    /// use nerdle::game::PlayerStats;
    ///
    /// let mut stats = PlayerStats::default();
    /// stats.record_game(3, true);
    /// stats.record_game(6, false);
    ///
    /// assert_eq!(stats.played, 2);
    /// assert_eq!(stats.win_distribution[2], 1);
    /// assert_eq!(stats.current_streak, 0);
    /// assert_eq!(stats.win_percent(), 50);
    /// ```
    pub fn record_game(&mut self, attempts: usize, won: bool) {
        self.played += 1;

        if won {
            self.wins += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            let bucket = attempts.clamp(1, MAX_ATTEMPTS) - 1;
            self.win_distribution[bucket] += 1;
        } else {
            self.current_streak = 0;
        }
    }

    /// Rounded percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_percent(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        (f64::from(self.wins) * 100.0 / f64::from(self.played)).round() as u32
    }

    /// Largest bucket, for scaling distribution bars
    #[must_use]
    pub fn max_bucket(&self) -> u32 {
        self.win_distribution.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_wins_then_loss() {
        let mut stats = PlayerStats::default();
        stats.record_game(1, true);
        stats.record_game(3, true);
        stats.record_game(3, true);
        stats.record_game(6, false);

        assert_eq!(stats.played, 4);
        assert_eq!(stats.wins, 3);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.win_distribution, [1, 0, 2, 0, 0, 0]);
        assert_eq!(stats.win_percent(), 75);
        assert_eq!(stats.max_bucket(), 2);
    }

    #[test]
    fn streak_rebuilds_after_loss() {
        let mut stats = PlayerStats::default();
        stats.record_game(2, true);
        stats.record_game(2, true);
        stats.record_game(6, false);
        stats.record_game(4, true);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn win_percent_rounds() {
        let stats = PlayerStats {
            played: 3,
            wins: 2,
            ..PlayerStats::default()
        };
        assert_eq!(stats.win_percent(), 67);
        assert_eq!(PlayerStats::default().win_percent(), 0);
    }

    #[test]
    fn stored_key_names() {
        let json = serde_json::to_value(PlayerStats::default()).unwrap();
        assert!(json.get("currentStreak").is_some());
        assert!(json.get("winDistribution").is_some());
    }
}
