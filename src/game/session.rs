//! The game state machine
//!
//! `GameSession` owns the board, keyboard hints and the secret for one game,
//! plus the long-lived settings and stats. Input methods return the events
//! they produced; rejected or out-of-sequence input leaves the state as it
//! was.

use super::{
    GameEvent, GuessRejection, PlayerStats, ScheduledTask, Scheduler, SettingKey, Settings,
    TimerId,
};
use crate::core::{
    GuessGrid, KeyHints, MAX_ATTEMPTS, WORD_LENGTH, Word, classify, hard_mode,
};
use crate::storage::{
    self, DAILY_KEY, DailyRecord, SETTINGS_KEY, STATS_KEY, Storage,
};
use crate::wordlists::{
    Clock, DailySchedule, SelectionMode, WordList, WordListVariant, select_secret,
};
use chrono::TimeDelta;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Popup on a win, indexed by the 0-based winning attempt
pub const SUCCESS_MESSAGES: [&str; MAX_ATTEMPTS] =
    ["Genius", "Magnificent", "Impressive", "Splendid", "Great", "Phew"];

/// Session tuning that is not a player setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub schedule: DailySchedule,
    /// Delay between the end of a game and the summary reveal
    pub summary_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            schedule: DailySchedule::default(),
            summary_delay: Duration::from_millis(2000),
        }
    }
}

/// The word being guessed and where it sits in the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub word: Word,
    pub index: usize,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    AwaitingInput,
    Finished(Outcome),
}

/// Snapshot of the session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub attempt: usize,
    pub letters_entered: usize,
    pub finished: bool,
    pub hard_mode: bool,
    pub daily_mode: bool,
}

/// One player's game, wired to its storage, timer and clock ports
pub struct GameSession<S, T, C> {
    config: SessionConfig,
    storage: S,
    scheduler: T,
    clock: C,
    rng: StdRng,
    corpus: Option<WordList>,
    secret: Option<Secret>,
    grid: GuessGrid,
    hints: KeyHints,
    attempt: usize,
    letters_entered: usize,
    phase: Phase,
    settings: Settings,
    stats: PlayerStats,
    summary_timer: Option<TimerId>,
}

impl<S: Storage, T: Scheduler, C: Clock> GameSession<S, T, C> {
    /// Create a session with stored settings and stats
    ///
    /// No corpus is loaded yet: submissions are rejected until
    /// `load_corpus` is called with the corpus named by
    /// `settings().word_list_variant()`.
    pub fn new(config: SessionConfig, storage: S, scheduler: T, clock: C) -> Self {
        let settings: Settings = storage::load_or_default(&storage, SETTINGS_KEY);
        let stats: PlayerStats = storage::load_or_default(&storage, STATS_KEY);
        debug!(?settings, played = stats.played, "session created");

        Self {
            config,
            storage,
            scheduler,
            clock,
            rng: StdRng::from_os_rng(),
            corpus: None,
            secret: None,
            grid: GuessGrid::new(),
            hints: KeyHints::new(),
            attempt: 0,
            letters_entered: 0,
            phase: Phase::AwaitingInput,
            settings,
            stats,
            summary_timer: None,
        }
    }

    /// Use a seeded generator for random secrets
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Install a freshly loaded corpus and start a game with it
    pub fn load_corpus(&mut self, corpus: WordList) -> Vec<GameEvent> {
        info!(
            words = corpus.len(),
            variant = %self.settings.word_list_variant(),
            "word list ready"
        );
        self.corpus = Some(corpus);
        self.start_game()
    }

    /// Report that the requested corpus could not be loaded
    ///
    /// The session stays without a corpus and rejects every submit.
    pub fn report_corpus_failure(&mut self, reason: &str) -> Vec<GameEvent> {
        warn!(reason, "word list failed to load");
        self.corpus = None;
        self.secret = None;
        vec![GameEvent::Popup(format!("Could not load word list: {reason}"))]
    }

    /// Write a letter into the next free cell of the current row
    pub fn type_letter(&mut self, letter: char) -> Vec<GameEvent> {
        if !letter.is_ascii_alphabetic()
            || self.is_finished()
            || self.attempt >= MAX_ATTEMPTS
            || self.letters_entered >= WORD_LENGTH
        {
            trace!(%letter, "ignored letter");
            return Vec::new();
        }

        self.grid
            .set_letter(self.attempt, self.letters_entered, letter.to_ascii_uppercase());
        self.letters_entered += 1;
        vec![GameEvent::GridChanged]
    }

    /// Clear the last typed letter of the current row
    pub fn backspace(&mut self) -> Vec<GameEvent> {
        if self.letters_entered == 0 || self.is_finished() {
            trace!("ignored backspace");
            return Vec::new();
        }

        self.letters_entered -= 1;
        self.grid.clear_letter(self.attempt, self.letters_entered);
        vec![GameEvent::GridChanged]
    }

    /// Submit the current row
    ///
    /// A rejected guess produces a single popup and changes nothing.
    pub fn submit(&mut self) -> Vec<GameEvent> {
        if self.is_finished()
            || self.attempt >= MAX_ATTEMPTS
            || self.grid.row(self.attempt).is_classified()
        {
            trace!("ignored submit");
            return Vec::new();
        }

        match self.check_guess() {
            Ok(guess) => self.accept_guess(&guess),
            Err(rejection) => {
                debug!(attempt = self.attempt, %rejection, "guess rejected");
                vec![GameEvent::Popup(rejection.to_string())]
            }
        }
    }

    /// Validate the current row without changing anything
    ///
    /// # Errors
    /// Returns the first `GuessRejection` that applies.
    pub fn check_guess(&self) -> Result<Word, GuessRejection> {
        let corpus = self.corpus.as_ref().ok_or(GuessRejection::CorpusNotReady)?;
        if self.secret.is_none() {
            return Err(GuessRejection::NoPuzzle);
        }

        let guess = Word::new(self.grid.row(self.attempt).typed())
            .ok()
            .filter(|word| corpus.contains(word))
            .ok_or(GuessRejection::NotInWordList)?;

        if self.letters_entered < WORD_LENGTH {
            return Err(GuessRejection::NotEnoughLetters);
        }

        if self.settings.hard_mode {
            hard_mode::validate(self.grid.rows_before(self.attempt), &guess)?;
        }

        Ok(guess)
    }

    fn accept_guess(&mut self, guess: &Word) -> Vec<GameEvent> {
        let Some(secret) = &self.secret else {
            return Vec::new();
        };
        let feedback = classify(&secret.word, guess);
        debug!(attempt = self.attempt, guess = %guess, pattern = %feedback.to_emoji(), "guess accepted");

        self.grid = self.grid.with_classified_row(self.attempt, guess, &feedback);
        self.hints = std::mem::take(&mut self.hints).with_guess(guess, &feedback);

        let mut events = vec![GameEvent::GridChanged, GameEvent::KeyHintsChanged];

        let won = feedback.is_perfect();
        if won || self.attempt == MAX_ATTEMPTS - 1 {
            self.finish(won, &mut events);
        } else {
            self.attempt += 1;
            self.letters_entered = 0;
        }

        if self.settings.daily_mode {
            self.save_daily();
        }

        events
    }

    fn finish(&mut self, won: bool, events: &mut Vec<GameEvent>) {
        let attempts = self.attempt + 1;
        self.phase = Phase::Finished(if won {
            Outcome::Won { attempts }
        } else {
            Outcome::Lost
        });

        self.stats.record_game(attempts, won);
        storage::save_record(&mut self.storage, STATS_KEY, &self.stats);

        let popup = if won {
            SUCCESS_MESSAGES[self.attempt].to_owned()
        } else {
            self.secret
                .as_ref()
                .map(|s| s.word.to_string())
                .unwrap_or_default()
        };
        info!(won, attempts, played = self.stats.played, "game finished");

        events.push(GameEvent::Popup(popup));
        events.push(GameEvent::GameFinished { won, attempts });
        events.push(GameEvent::StatsChanged);

        self.summary_timer = Some(
            self.scheduler
                .schedule(self.config.summary_delay, ScheduledTask::RevealSummary),
        );
    }

    fn save_daily(&mut self) {
        if let Some(secret) = &self.secret {
            let record = DailyRecord {
                guesses: self.grid.clone(),
                word_list_index: secret.index,
            };
            storage::save_record(&mut self.storage, DAILY_KEY, &record);
        }
    }

    /// Start over
    ///
    /// With `keep_settings == false` the settings go back to their defaults
    /// first. In daily mode the new game is today's puzzle, resumed from
    /// storage when possible.
    pub fn reset(&mut self, keep_settings: bool) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if !keep_settings && self.settings != Settings::default() {
            let previous = self.settings.word_list_variant();
            self.settings = Settings::default();
            storage::save_record(&mut self.storage, SETTINGS_KEY, &self.settings);
            events.push(GameEvent::SettingsChanged(self.settings));

            if previous != self.settings.word_list_variant() {
                events.extend(self.request_corpus());
                return events;
            }
        }

        events.extend(self.start_game());
        events
    }

    /// Change one setting and apply its effect on the game
    pub fn set_setting(&mut self, key: SettingKey, value: bool) -> Vec<GameEvent> {
        if self.settings.get(key) == value {
            return Vec::new();
        }

        self.settings = self.settings.with(key, value);
        storage::save_record(&mut self.storage, SETTINGS_KEY, &self.settings);
        info!(?key, value, "setting changed");

        let mut events = vec![GameEvent::SettingsChanged(self.settings)];
        match key {
            SettingKey::DailyMode => events.extend(self.start_game()),
            SettingKey::WordleWordlist => events.extend(self.request_corpus()),
            SettingKey::HardMode | SettingKey::DarkMode | SettingKey::HighContrastMode => {}
        }
        events
    }

    fn request_corpus(&mut self) -> Vec<GameEvent> {
        self.cancel_summary();
        self.corpus = None;
        self.secret = None;
        vec![GameEvent::CorpusRequested(self.settings.word_list_variant())]
    }

    /// Let simulated or real time pass, firing any due timers
    pub fn tick(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for (id, task) in self.scheduler.advance(elapsed) {
            if self.summary_timer != Some(id) {
                continue;
            }
            self.summary_timer = None;
            match task {
                ScheduledTask::RevealSummary => events.push(GameEvent::SummaryReady),
            }
        }
        events
    }

    fn cancel_summary(&mut self) {
        if let Some(id) = self.summary_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn start_game(&mut self) -> Vec<GameEvent> {
        self.cancel_summary();
        self.grid = GuessGrid::new();
        self.hints = KeyHints::new();
        self.attempt = 0;
        self.letters_entered = 0;
        self.phase = Phase::AwaitingInput;
        self.secret = None;

        let mut events = vec![GameEvent::GridChanged, GameEvent::KeyHintsChanged];

        let Some(corpus) = &self.corpus else {
            return events;
        };

        let mode = if self.settings.daily_mode {
            SelectionMode::Daily
        } else {
            SelectionMode::Random
        };
        let today = self.clock.today();

        let selected = select_secret(mode, corpus.len(), &self.config.schedule, today, &mut self.rng)
            .ok()
            .and_then(|index| corpus.get(index).map(|word| (index, word.clone())));

        let Some((index, word)) = selected else {
            warn!(?mode, %today, "no secret could be selected");
            events.push(GameEvent::Popup(GuessRejection::NoPuzzle.to_string()));
            return events;
        };

        debug!(?mode, index, secret = %word, "secret selected");
        self.secret = Some(Secret { word, index });

        if self.settings.daily_mode {
            self.restore_daily(index);
        }
        events
    }

    /// Resume today's stored board, clearing it if it is stale or malformed
    fn restore_daily(&mut self, index: usize) {
        let Some(record) = storage::load_optional::<DailyRecord, _>(&self.storage, DAILY_KEY) else {
            return;
        };
        let Some(secret) = &self.secret else {
            return;
        };

        if record.word_list_index != index {
            debug!(stored = record.word_list_index, today = index, "clearing previous daily board");
            storage::remove_record(&mut self.storage, DAILY_KEY);
            return;
        }

        let grid = record.guesses;
        let classified = grid.classified_count();
        let winning = grid.winning_row();
        let consistent = grid.is_settled()
            && grid.agrees_with(&secret.word)
            && winning.is_none_or(|row| row + 1 == classified);

        if !consistent {
            warn!("stored daily board does not match today's puzzle, clearing it");
            storage::remove_record(&mut self.storage, DAILY_KEY);
            return;
        }

        self.hints = KeyHints::from_grid(&grid);
        self.grid = grid;
        self.letters_entered = 0;

        match winning {
            Some(row) => {
                self.attempt = row;
                self.phase = Phase::Finished(Outcome::Won { attempts: row + 1 });
            }
            None if classified == MAX_ATTEMPTS => {
                self.attempt = MAX_ATTEMPTS - 1;
                self.phase = Phase::Finished(Outcome::Lost);
            }
            None => self.attempt = classified,
        }
        info!(rows = classified, finished = self.is_finished(), "resumed daily board");
    }

    #[must_use]
    pub const fn grid(&self) -> &GuessGrid {
        &self.grid
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyHints {
        &self.hints
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub const fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// True once a corpus is installed
    #[must_use]
    pub const fn corpus_ready(&self) -> bool {
        self.corpus.is_some()
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&Secret> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        SessionState {
            attempt: self.attempt,
            letters_entered: self.letters_entered,
            finished: self.is_finished(),
            hard_mode: self.settings.hard_mode,
            daily_mode: self.settings.daily_mode,
        }
    }

    /// Corpus the current settings ask for
    #[must_use]
    pub const fn word_list_variant(&self) -> WordListVariant {
        self.settings.word_list_variant()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Time until the next daily puzzle, by the session's clock
    #[must_use]
    pub fn time_until_next_daily(&self) -> TimeDelta {
        self.config.schedule.time_until_next(self.clock.now())
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
