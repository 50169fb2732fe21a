//! Command implementations

pub mod check;
pub mod daily;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_word};
pub use daily::{DailyInfo, daily_info};
pub use simple::run_simple;
pub use stats::{clear_stats, read_stats};
