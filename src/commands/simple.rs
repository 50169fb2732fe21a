//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess or a command.

use crate::core::WORD_LENGTH;
use crate::game::{GameEvent, GameSession, Scheduler, SettingKey};
use crate::output::{print_board, print_help, print_keyboard, print_next_daily, print_stats};
use crate::storage::Storage;
use crate::wordlists::{Clock, loader};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Popup for a line longer than a word
pub const TOO_MANY_LETTERS: &str = "Too many letters";

/// Replace the current row with `text` and submit it
///
/// Letters already typed on the row are cleared first. A line longer than
/// `WORD_LENGTH` is turned away before anything is typed.
pub fn enter_word<S, T, C>(session: &mut GameSession<S, T, C>, text: &str) -> Vec<GameEvent>
where
    S: Storage,
    T: Scheduler,
    C: Clock,
{
    let text = text.trim();
    if text.chars().count() > WORD_LENGTH {
        return vec![GameEvent::Popup(TOO_MANY_LETTERS.to_string())];
    }

    let mut events = Vec::new();
    for _ in 0..session.state().letters_entered {
        events.extend(session.backspace());
    }
    for letter in text.chars() {
        events.extend(session.type_letter(letter));
    }
    events.extend(session.submit());
    events
}

/// React to session events: print popups, load requested corpora and show
/// the summary once it is due
///
/// # Errors
///
/// Returns an error only if writing to stdout fails.
pub fn handle_events<S, T, C>(
    session: &mut GameSession<S, T, C>,
    events: Vec<GameEvent>,
    custom_wordlist: Option<&Path>,
) -> Result<()>
where
    S: Storage,
    T: Scheduler,
    C: Clock,
{
    let mut queue = events;
    while !queue.is_empty() {
        let mut follow_up = Vec::new();
        for event in queue {
            match event {
                GameEvent::Popup(text) => println!("  {}", text.bright_yellow().bold()),
                GameEvent::CorpusRequested(variant) => {
                    match loader::load_corpus(variant, custom_wordlist) {
                        Ok(corpus) => follow_up.extend(session.load_corpus(corpus)),
                        Err(err) => follow_up.extend(session.report_corpus_failure(&err.to_string())),
                    }
                }
                GameEvent::GameFinished { .. } => {
                    print_board(session.grid());
                    let delay = session.config().summary_delay;
                    follow_up.extend(session.tick(delay));
                }
                GameEvent::SummaryReady => {
                    print_stats(session.stats());
                    if session.settings().daily_mode {
                        print_next_daily(session.time_until_next_daily());
                    }
                    println!("\n  Type 'new' for another game or 'quit' to exit.");
                }
                GameEvent::SettingsChanged(settings) => {
                    println!(
                        "  hard mode: {}  daily: {}  wordle list: {}",
                        on_off(settings.hard_mode),
                        on_off(settings.daily_mode),
                        on_off(settings.wordle_wordlist)
                    );
                }
                GameEvent::GridChanged
                | GameEvent::KeyHintsChanged
                | GameEvent::StatsChanged => {}
            }
        }
        queue = follow_up;
    }
    io::stdout().flush()?;
    Ok(())
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S, T, C>(
    session: &mut GameSession<S, T, C>,
    custom_wordlist: Option<&Path>,
) -> Result<()>
where
    S: Storage,
    T: Scheduler,
    C: Clock,
{
    println!("\n╔════════════════════════════════════════╗");
    println!("║             NERDLE - Simple            ║");
    println!("╚════════════════════════════════════════╝");
    print_help();
    println!("Commands: 'new', 'hard', 'daily', 'wordle', 'stats', 'help', 'quit'\n");

    if !session.corpus_ready() {
        let variant = session.word_list_variant();
        handle_events(session, vec![GameEvent::CorpusRequested(variant)], custom_wordlist)?;
    }

    loop {
        let state = session.state();
        let prompt = if state.finished {
            "Command".to_string()
        } else {
            format!("Guess {}/{}", state.attempt + 1, crate::core::MAX_ATTEMPTS)
        };

        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let settings = session.settings();

        let events = match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let events = session.reset(true);
                println!("\n🔄 New game started!\n");
                events
            }
            "hard" => session.set_setting(SettingKey::HardMode, !settings.hard_mode),
            "daily" => session.set_setting(SettingKey::DailyMode, !settings.daily_mode),
            "wordle" => session.set_setting(SettingKey::WordleWordlist, !settings.wordle_wordlist),
            "stats" => {
                print_stats(session.stats());
                continue;
            }
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            word => {
                let events = enter_word(session, word);
                if events.contains(&GameEvent::KeyHintsChanged) && !session.is_finished() {
                    print_board(session.grid());
                    print_keyboard(session.hints());
                    println!();
                }
                events
            }
        };

        handle_events(session, events, custom_wordlist)?;
    }
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
