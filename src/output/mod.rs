//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_daily_info, print_help, print_keyboard,
    print_next_daily, print_stats,
};
