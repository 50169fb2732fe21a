//! TUI application state and logic

use super::theme::Theme;
use crate::game::{GameEvent, GameSession, Scheduler, SettingKey};
use crate::storage::Storage;
use crate::wordlists::{Clock, loader};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long a popup message stays on screen
const POPUP_LIFETIME: Duration = Duration::from_millis(2500);

/// Input poll interval; also the timer resolution
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Popup {
    pub text: String,
    pub remaining: Duration,
}

/// Overlay shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Help,
    Settings { selected: usize },
    Stats,
}

/// Application state
pub struct App<S, T, C> {
    pub session: GameSession<S, T, C>,
    pub custom_wordlist: Option<PathBuf>,
    pub popups: Vec<Popup>,
    pub modal: Option<Modal>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl<S: Storage, T: Scheduler, C: Clock> App<S, T, C> {
    #[must_use]
    pub fn new(session: GameSession<S, T, C>, custom_wordlist: Option<PathBuf>) -> Self {
        let theme = Theme::from_settings(&session.settings());
        Self {
            session,
            custom_wordlist,
            popups: Vec::new(),
            modal: None,
            theme,
            should_quit: false,
        }
    }

    /// Load the corpus the settings ask for
    pub fn start(&mut self) {
        let variant = self.session.word_list_variant();
        self.apply(vec![GameEvent::CorpusRequested(variant)]);
    }

    /// Feed session events back into the UI state
    pub fn apply(&mut self, events: Vec<GameEvent>) {
        let mut queue = events;
        while !queue.is_empty() {
            let mut follow_up = Vec::new();
            for event in queue {
                match event {
                    GameEvent::Popup(text) => self.add_popup(text),
                    GameEvent::SettingsChanged(settings) => {
                        self.theme = Theme::from_settings(&settings);
                    }
                    GameEvent::CorpusRequested(variant) => {
                        let result = loader::load_corpus(variant, self.custom_wordlist.as_deref());
                        follow_up.extend(match result {
                            Ok(corpus) => self.session.load_corpus(corpus),
                            Err(err) => self.session.report_corpus_failure(&err.to_string()),
                        });
                    }
                    GameEvent::SummaryReady => self.modal = Some(Modal::Stats),
                    GameEvent::GameFinished { won, attempts } => {
                        debug!(won, attempts, "game over");
                    }
                    GameEvent::GridChanged
                    | GameEvent::KeyHintsChanged
                    | GameEvent::StatsChanged => {}
                }
            }
            queue = follow_up;
        }
    }

    pub fn add_popup(&mut self, text: String) {
        self.popups.push(Popup {
            text,
            remaining: POPUP_LIFETIME,
        });

        // Keep only last 3 popups
        if self.popups.len() > 3 {
            self.popups.remove(0);
        }
    }

    /// Advance timers and expire popups
    pub fn tick(&mut self, elapsed: Duration) {
        for popup in &mut self.popups {
            popup.remaining = popup.remaining.saturating_sub(elapsed);
        }
        self.popups.retain(|p| !p.remaining.is_zero());

        let events = self.session.tick(elapsed);
        self.apply(events);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.modal {
            Some(Modal::Settings { selected }) => self.handle_settings_key(key.code, selected),
            Some(Modal::Stats) if key.code == KeyCode::F(5) => {
                self.modal = None;
                let events = self.session.reset(true);
                self.apply(events);
            }
            Some(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1..=3)) {
                    self.modal = None;
                }
            }
            None => self.handle_game_key(key.code),
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        let events = match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(1) => {
                self.modal = Some(Modal::Help);
                return;
            }
            KeyCode::F(2) => {
                self.modal = Some(Modal::Stats);
                return;
            }
            KeyCode::F(3) => {
                self.modal = Some(Modal::Settings { selected: 0 });
                return;
            }
            KeyCode::F(5) => self.session.reset(true),
            KeyCode::Char(c) => self.session.type_letter(c),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => self.session.submit(),
            _ => return,
        };
        self.apply(events);
    }

    fn handle_settings_key(&mut self, code: KeyCode, selected: usize) {
        let count = SettingKey::ALL.len();
        match code {
            KeyCode::Esc | KeyCode::F(3) => self.modal = None,
            KeyCode::Up => {
                self.modal = Some(Modal::Settings {
                    selected: (selected + count - 1) % count,
                });
            }
            KeyCode::Down | KeyCode::Tab => {
                self.modal = Some(Modal::Settings {
                    selected: (selected + 1) % count,
                });
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let key = SettingKey::ALL[selected % count];
                let value = !self.session.settings().get(key);
                let events = self.session.set_setting(key, value);
                self.apply(events);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Storage, T: Scheduler, C: Clock>(app: App<S, T, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, T, C>(terminal: &mut Terminal<B>, mut app: App<S, T, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: Storage,
    T: Scheduler,
    C: Clock,
{
    app.start();
    info!("interactive session started");
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        let now = Instant::now();
        app.tick(now - last_tick);
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    info!("interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::{SessionConfig, TimerQueue};
    use crate::storage::MemoryStorage;
    use crate::wordlists::FixedClock;
    use chrono::NaiveDate;

    type TestApp = App<MemoryStorage, TimerQueue, FixedClock>;

    fn app() -> TestApp {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let session =
            GameSession::new(SessionConfig::default(), MemoryStorage::new(), TimerQueue::new(), clock)
                .with_seed(9);
        let mut app = App::new(session, None);
        app.start();
        app
    }

    fn press(app: &mut TestApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut TestApp, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn start_loads_corpus() {
        let app = app();
        assert!(app.session.corpus_ready());
        assert!(app.session.secret().is_some());
    }

    #[test]
    fn typing_and_rejection_popup() {
        let mut app = app();
        type_word(&mut app, "cr");
        assert_eq!(app.popups.last().map(|p| p.text.as_str()), Some("Not in word list"));

        app.tick(POPUP_LIFETIME);
        assert!(app.popups.is_empty());
    }

    #[test]
    fn winning_opens_stats_after_delay() {
        let mut app = app();
        let secret = app.session.secret().unwrap().word.text().to_string();
        type_word(&mut app, &secret);

        assert!(app.session.is_finished());
        assert_eq!(app.modal, None);
        app.tick(Duration::from_secs(2));
        assert_eq!(app.modal, Some(Modal::Stats));

        press(&mut app, KeyCode::F(5));
        assert_eq!(app.modal, None);
        assert!(!app.session.is_finished());
    }

    #[test]
    fn settings_modal_toggles_dark_mode() {
        let mut app = app();
        press(&mut app, KeyCode::F(3));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.session.settings().dark_mode);
        assert_eq!(app.theme, Theme::new(true, false));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
        assert!(!app.should_quit);
    }

    #[test]
    fn wordlist_toggle_reloads_corpus() {
        let mut app = app();
        press(&mut app, KeyCode::F(3));
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.session.settings().wordle_wordlist);
        assert!(app.session.corpus_ready());
        assert_eq!(app.session.hints().get('A'), LetterStatus::Empty);
    }

    #[test]
    fn escape_quits_from_board() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
