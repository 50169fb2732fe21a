//! Display functions for command results

use super::formatters::{distribution_bar, format_countdown, format_row, row_to_emoji};
use crate::commands::{CheckResult, DailyInfo};
use crate::core::{GuessGrid, KEYBOARD_LAYOUT, KeyHints, LetterStatus, Row};
use crate::game::{HELP_TEXT, PlayerStats};
use chrono::TimeDelta;
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().bright_yellow().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let row = Row::classified(&result.guess, &result.feedback);
    println!("\n  {}", format_row(&row));
    println!("  {}", result.feedback.to_emoji());

    if !result.in_word_list {
        println!("\n  {}", "Not in word list".red());
    }
    if result.feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print every row that holds letters
pub fn print_board(grid: &GuessGrid) {
    println!();
    for row in grid.rows().iter().filter(|r| !r.is_blank()) {
        println!("  {}   {}", format_row(row), row_to_emoji(row));
    }
    println!();
}

/// Print the keyboard with each key colored by its hint
pub fn print_keyboard(hints: &KeyHints) {
    for (indent, keys) in KEYBOARD_LAYOUT.iter().enumerate() {
        let line: Vec<String> = keys
            .chars()
            .map(|key| {
                let text = key.to_string();
                match hints.get(key) {
                    LetterStatus::Correct => text.green().bold().to_string(),
                    LetterStatus::Present => text.yellow().bold().to_string(),
                    LetterStatus::Absent => text.bright_black().to_string(),
                    LetterStatus::Empty => text,
                }
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), line.join(" "));
    }
}

/// Print the statistics summary
pub fn print_stats(stats: &PlayerStats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        stats.win_percent().to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_bucket();
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        println!(
            "   {}: {} {count}",
            i + 1,
            distribution_bar(count, max, 20).green()
        );
    }
}

/// Print the countdown to the next daily puzzle
pub fn print_next_daily(remaining: TimeDelta) {
    println!(
        "\n   Next NERDLE in {}",
        format_countdown(remaining).bright_yellow().bold()
    );
}

/// Print today's puzzle details
pub fn print_daily_info(info: &DailyInfo) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " Daily NERDLE #{} ({})",
        info.puzzle_number.to_string().bright_yellow().bold(),
        info.date
    );
    println!("{}", "─".repeat(40).cyan());
    println!("   Word list position: {} of {}", info.index + 1, info.corpus_size);
    print_next_daily(info.time_until_next);
}

/// Print the how-to-play text
pub fn print_help() {
    println!();
    for line in HELP_TEXT {
        println!("  {line}");
    }
    println!();
}
