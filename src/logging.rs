//! Tracing subscriber setup

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Standard error, for line-based commands
    Stderr,
    /// A plain-text file, for the full-screen UI
    File(&'a Path),
}

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `verbose`. Installing twice is harmless.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(target: LogTarget<'_>, verbose: bool) -> std::io::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(verbose));

    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    Ok(())
}
