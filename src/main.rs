//! NERDLE - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use nerdle::{
    commands::{check_word, clear_stats, daily_info, read_stats, run_simple},
    game::{GameSession, SessionConfig, Settings, TimerQueue},
    logging::{self, LogTarget},
    output::{print_check_result, print_daily_info, print_stats},
    storage::{self, FileStorage, SETTINGS_KEY},
    wordlists::{Clock, DailyPolicy, DailySchedule, SystemClock, WordListVariant, loader},
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nerdle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for settings, statistics and the daily board
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Custom word list file (one five-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Day zero of the daily puzzle calendar (YYYY-MM-DD)
    #[arg(long, global = true)]
    anchor: Option<NaiveDate>,

    /// Days added to the daily puzzle number
    #[arg(long, global = true, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Daily index policy: 'wrapping' (default) or 'sequential'
    #[arg(long, global = true, default_value = "wrapping")]
    policy: String,

    /// Delay before the end-of-game summary, in milliseconds
    #[arg(long, global = true, default_value = "2000")]
    summary_delay_ms: u64,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,

    /// Show the feedback a guess gets against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guess
        guess: String,
    },

    /// Show today's daily puzzle number
    Daily,

    /// Show stored statistics
    Stats {
        /// Clear the stored statistics
        #[arg(long)]
        reset: bool,
    },
}

fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let Some(policy) = DailyPolicy::from_name(&cli.policy) else {
        bail!("unknown daily policy '{}': use 'wrapping' or 'sequential'", cli.policy);
    };

    let defaults = DailySchedule::default();
    Ok(SessionConfig {
        schedule: DailySchedule {
            anchor: cli.anchor.unwrap_or(defaults.anchor),
            offset_days: cli.offset.unwrap_or(defaults.offset_days),
            policy,
        },
        summary_delay: Duration::from_millis(cli.summary_delay_ms),
    })
}

fn data_dir(cli: &Cli) -> PathBuf {
    cli.data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(".nerdle"))
}

fn open_storage(dir: &Path) -> Result<FileStorage> {
    FileStorage::open(dir).with_context(|| format!("cannot use data directory {}", dir.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = session_config(&cli)?;
    let dir = data_dir(&cli);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => {
            let storage = open_storage(&dir)?;
            logging::init(LogTarget::File(&dir.join("nerdle.log")), cli.verbose)?;
            run_play_command(config, storage, cli.wordlist.clone())
        }
        Commands::Simple => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            let storage = open_storage(&dir)?;
            run_simple_command(config, storage, cli.wordlist.as_deref())
        }
        Commands::Check { secret, guess } => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            let corpus = loader::load_corpus(WordListVariant::Full, cli.wordlist.as_deref())?;
            let result = check_word(secret, guess, &corpus)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Daily => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            run_daily_command(&config, &dir, cli.wordlist.as_deref())
        }
        Commands::Stats { reset } => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            let mut storage = open_storage(&dir)?;
            if *reset {
                clear_stats(&mut storage);
            }
            print_stats(&read_stats(&storage));
            Ok(())
        }
    }
}

fn run_daily_command(config: &SessionConfig, dir: &Path, wordlist: Option<&Path>) -> Result<()> {
    let storage = open_storage(dir)?;
    let settings: Settings = storage::load_or_default(&storage, SETTINGS_KEY);
    let corpus = loader::load_corpus(settings.word_list_variant(), wordlist)?;

    let info = daily_info(&config.schedule, &corpus, SystemClock.now())?;
    print_daily_info(&info);
    Ok(())
}

fn run_simple_command(
    config: SessionConfig,
    storage: FileStorage,
    wordlist: Option<&Path>,
) -> Result<()> {
    info!(data_dir = %storage.dir().display(), "starting simple mode");
    let mut session = GameSession::new(config, storage, TimerQueue::new(), SystemClock);
    run_simple(&mut session, wordlist)
}

fn run_play_command(
    config: SessionConfig,
    storage: FileStorage,
    wordlist: Option<PathBuf>,
) -> Result<()> {
    use nerdle::interactive::{App, run_tui};

    let session = GameSession::new(config, storage, TimerQueue::new(), SystemClock);
    let app = App::new(session, wordlist);
    run_tui(app)
}
