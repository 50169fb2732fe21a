//! Secret word selection
//!
//! Random games draw a uniform index into the corpus. Daily games derive the
//! index from the local calendar date relative to a configurable anchor, so
//! every player sees the same word on the same day and a new one after
//! midnight.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the next secret is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Random,
    Daily,
}

/// How a day number maps onto a corpus index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyPolicy {
    /// `day_number mod corpus_size`: cycles through the corpus forever
    #[default]
    Wrapping,
    /// `day_number` used directly; fails once the corpus runs out
    Sequential,
}

impl DailyPolicy {
    /// Parse a policy name, as accepted on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "wrapping" | "wrap" | "modulo" => Some(Self::Wrapping),
            "sequential" | "offset" => Some(Self::Sequential),
            _ => None,
        }
    }
}

/// Errors from secret selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("word list is empty")]
    EmptyCorpus,
    #[error("no daily puzzle for day {day}: word list has {corpus_size} words")]
    DayOutOfRange { day: i64, corpus_size: usize },
}

const DEFAULT_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(2021, 5, 18) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Daily puzzle calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    /// Day zero of the calendar
    pub anchor: NaiveDate,
    /// Added to the day count, so the sequence can start part-way through the corpus
    pub offset_days: i64,
    pub policy: DailyPolicy,
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR,
            offset_days: 1000,
            policy: DailyPolicy::Wrapping,
        }
    }
}

impl DailySchedule {
    /// Puzzle number for `today`, saturating at the `i64` bounds
    #[must_use]
    pub fn day_number(&self, today: NaiveDate) -> i64 {
        self.days_since_anchor(today).saturating_add(self.offset_days)
    }

    /// Puzzle number for `today`, or `None` if the offset overflows it
    #[must_use]
    pub fn checked_day_number(&self, today: NaiveDate) -> Option<i64> {
        self.days_since_anchor(today).checked_add(self.offset_days)
    }

    fn days_since_anchor(&self, today: NaiveDate) -> i64 {
        today.signed_duration_since(self.anchor).num_days()
    }

    /// Corpus index of the puzzle for `today`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::EmptyCorpus` for an empty corpus, and
    /// `SelectionError::DayOutOfRange` when the puzzle number overflows or
    /// the sequential policy runs off either end of the corpus.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use nerdle::wordlists::DailySchedule;
    ///
    /// let schedule = DailySchedule::default();
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let next = day.succ_opt().unwrap();
    ///
    /// let index = schedule.daily_index(day, 2000).unwrap();
    /// assert_eq!(index, schedule.daily_index(day, 2000).unwrap());
    /// assert_ne!(index, schedule.daily_index(next, 2000).unwrap());
    /// ```
    pub fn daily_index(&self, today: NaiveDate, corpus_size: usize) -> Result<usize, SelectionError> {
        if corpus_size == 0 {
            return Err(SelectionError::EmptyCorpus);
        }

        let day = self
            .checked_day_number(today)
            .ok_or(SelectionError::DayOutOfRange {
                day: self.day_number(today),
                corpus_size,
            })?;
        match self.policy {
            DailyPolicy::Wrapping => {
                let size = i64::try_from(corpus_size).unwrap_or(i64::MAX);
                Ok(day.rem_euclid(size) as usize)
            }
            DailyPolicy::Sequential => usize::try_from(day)
                .ok()
                .filter(|&index| index < corpus_size)
                .ok_or(SelectionError::DayOutOfRange { day, corpus_size }),
        }
    }

    /// Time left until the next local midnight, when a new puzzle starts
    #[must_use]
    pub fn time_until_next(&self, now: NaiveDateTime) -> TimeDelta {
        now.date()
            .succ_opt()
            .map_or(TimeDelta::zero(), |tomorrow| {
                tomorrow.and_time(NaiveTime::MIN).signed_duration_since(now)
            })
    }
}

/// Pick a corpus index for a new game
///
/// # Errors
///
/// Returns `SelectionError` when the corpus is empty or the daily schedule
/// has no puzzle for `today`.
pub fn select_secret<R: Rng + ?Sized>(
    mode: SelectionMode,
    corpus_size: usize,
    schedule: &DailySchedule,
    today: NaiveDate,
    rng: &mut R,
) -> Result<usize, SelectionError> {
    match mode {
        SelectionMode::Random if corpus_size == 0 => Err(SelectionError::EmptyCorpus),
        SelectionMode::Random => Ok(rng.random_range(0..corpus_size)),
        SelectionMode::Daily => schedule.daily_index(today, corpus_size),
    }
}

/// Source of the local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Midnight at the start of `date`
    #[must_use]
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }

    pub fn advance(&mut self, by: TimeDelta) {
        self.now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_schedule_starts_at_anchor_plus_offset() {
        let schedule = DailySchedule::default();
        assert_eq!(schedule.day_number(date(2021, 5, 18)), 1000);
        assert_eq!(schedule.day_number(date(2021, 5, 19)), 1001);
        assert_eq!(schedule.daily_index(date(2021, 5, 18), 2315), Ok(1000));
        assert_eq!(schedule.daily_index(date(2021, 5, 18), 300), Ok(100));
    }

    #[test]
    fn same_day_same_index_next_day_differs() {
        let schedule = DailySchedule::default();
        let mut rng = StdRng::seed_from_u64(7);
        let today = date(2025, 1, 31);

        let a = select_secret(SelectionMode::Daily, 2250, &schedule, today, &mut rng).unwrap();
        let b = select_secret(SelectionMode::Daily, 2250, &schedule, today, &mut rng).unwrap();
        let c = select_secret(
            SelectionMode::Daily,
            2250,
            &schedule,
            today.succ_opt().unwrap(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!((a + 1) % 2250, c);
    }

    #[test]
    fn wrapping_handles_days_before_anchor() {
        let schedule = DailySchedule {
            anchor: date(2024, 1, 10),
            offset_days: 0,
            policy: DailyPolicy::Wrapping,
        };
        assert_eq!(schedule.daily_index(date(2024, 1, 9), 10), Ok(9));
    }

    #[test]
    fn sequential_runs_out() {
        let schedule = DailySchedule {
            anchor: date(2024, 1, 1),
            offset_days: 0,
            policy: DailyPolicy::Sequential,
        };
        assert_eq!(schedule.daily_index(date(2024, 1, 3), 5), Ok(2));
        assert_eq!(
            schedule.daily_index(date(2024, 1, 6), 5),
            Err(SelectionError::DayOutOfRange {
                day: 5,
                corpus_size: 5
            })
        );
        assert!(schedule.daily_index(date(2023, 12, 31), 5).is_err());
    }

    #[test]
    fn huge_offset_is_out_of_range() {
        for policy in [DailyPolicy::Wrapping, DailyPolicy::Sequential] {
            let schedule = DailySchedule {
                anchor: date(2024, 1, 1),
                offset_days: i64::MAX,
                policy,
            };
            let today = date(2024, 1, 3);

            assert_eq!(schedule.day_number(today), i64::MAX);
            assert_eq!(schedule.checked_day_number(today), None);
            assert_eq!(
                schedule.daily_index(today, 10),
                Err(SelectionError::DayOutOfRange {
                    day: i64::MAX,
                    corpus_size: 10
                })
            );
        }
    }

    #[test]
    fn random_stays_in_range() {
        let schedule = DailySchedule::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let index =
                select_secret(SelectionMode::Random, 17, &schedule, date(2024, 1, 1), &mut rng)
                    .unwrap();
            assert!(index < 17);
        }
    }

    #[test]
    fn empty_corpus_is_error() {
        let schedule = DailySchedule::default();
        let mut rng = StdRng::seed_from_u64(1);
        for mode in [SelectionMode::Random, SelectionMode::Daily] {
            assert_eq!(
                select_secret(mode, 0, &schedule, date(2024, 1, 1), &mut rng),
                Err(SelectionError::EmptyCorpus)
            );
        }
    }

    #[test]
    fn time_until_midnight() {
        let schedule = DailySchedule::default();
        let now = date(2024, 2, 29).and_hms_opt(22, 30, 0).unwrap();
        assert_eq!(schedule.time_until_next(now), TimeDelta::minutes(90));
    }

    #[test]
    fn policy_names() {
        assert_eq!(DailyPolicy::from_name("Wrapping"), Some(DailyPolicy::Wrapping));
        assert_eq!(DailyPolicy::from_name("offset"), Some(DailyPolicy::Sequential));
        assert_eq!(DailyPolicy::from_name("weekly"), None);
    }

    #[test]
    fn fixed_clock_advances() {
        let mut clock = FixedClock::on(date(2024, 5, 1));
        clock.advance(TimeDelta::days(1));
        assert_eq!(clock.today(), date(2024, 5, 2));
    }
}
