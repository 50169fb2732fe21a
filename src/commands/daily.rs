//! Information about today's daily puzzle

use crate::wordlists::{DailySchedule, SelectionError, WordList};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Today's puzzle, without revealing the word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyInfo {
    pub date: NaiveDate,
    pub puzzle_number: i64,
    pub index: usize,
    pub corpus_size: usize,
    pub time_until_next: TimeDelta,
}

/// Work out today's puzzle for `corpus`
///
/// # Errors
///
/// Returns `SelectionError` if the schedule has no puzzle for today.
pub fn daily_info(
    schedule: &DailySchedule,
    corpus: &WordList,
    now: NaiveDateTime,
) -> Result<DailyInfo, SelectionError> {
    let date = now.date();
    let index = schedule.daily_index(date, corpus.len())?;

    Ok(DailyInfo {
        date,
        puzzle_number: schedule.day_number(date),
        index,
        corpus_size: corpus.len(),
        time_until_next: schedule.time_until_next(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DailyPolicy, loader::words_from_slice};

    #[test]
    fn info_for_day() {
        let corpus = WordList::new(words_from_slice(&["CRANE", "SLATE", "ROBOT"])).unwrap();
        let schedule = DailySchedule {
            anchor: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            offset_days: 0,
            policy: DailyPolicy::Wrapping,
        };
        let now = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        let info = daily_info(&schedule, &corpus, now).unwrap();
        assert_eq!(info.puzzle_number, 4);
        assert_eq!(info.index, 1);
        assert_eq!(info.time_until_next, TimeDelta::hours(6));
    }
}
