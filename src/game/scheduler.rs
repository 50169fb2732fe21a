//! Delayed callbacks
//!
//! The session never sleeps. It asks a `Scheduler` to fire a task later and
//! the front-end drives time forward, so tests can simulate the delay.

use std::time::Duration;

/// Handle for a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Work the session can schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Show the end-of-game summary
    RevealSummary,
}

/// Scheduled-callback port
pub trait Scheduler {
    /// Fire `task` once `delay` has elapsed
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerId;

    /// Drop a pending task; unknown or fired ids are ignored
    fn cancel(&mut self, id: TimerId);

    /// Move time forward and return the tasks that came due, earliest first
    fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, ScheduledTask)>;
}

/// In-process timer list driven by `advance`
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerId, ScheduledTask)>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, id, task));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, pending, _)| *pending != id);
    }

    fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, ScheduledTask)> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _, _)| *at <= now);
        self.pending = waiting;

        due.sort_by_key(|(at, id, _)| (*at, id.0));
        due.into_iter().map(|(_, id, task)| (id, task)).collect()
    }
}
