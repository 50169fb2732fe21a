//! Persistence port
//!
//! The session reads and writes three JSON records through the `Storage`
//! trait: player stats, settings and the in-progress daily board. Storage
//! is best effort; anything missing or malformed reads back as "no data".

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::core::GuessGrid;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::io;
use thiserror::Error;
use tracing::warn;

/// Key of the `PlayerStats` record
pub const STATS_KEY: &str = "playerStats";
/// Key of the `Settings` record
pub const SETTINGS_KEY: &str = "settings";
/// Key of the `DailyRecord`
pub const DAILY_KEY: &str = "dailyGuesses";

/// Errors from a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for {key}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("stored {key} is not valid JSON")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store holding raw JSON text
pub trait Storage {
    /// # Errors
    /// Returns `StorageError::Io` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    /// Returns `StorageError::Io` if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    /// Returns `StorageError::Io` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Saved daily board, matched against today's puzzle on load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub guesses: GuessGrid,
    pub word_list_index: usize,
}

/// Read and decode a record
///
/// # Errors
/// Returns `StorageError` if the backend fails or the stored text is not
/// valid JSON for `T`.
pub fn load<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    storage
        .read(key)?
        .map(|text| {
            serde_json::from_str(&text).map_err(|source| StorageError::Json {
                key: key.to_owned(),
                source,
            })
        })
        .transpose()
}

/// Read a record, treating any failure as "nothing stored"
pub fn load_optional<T, S>(storage: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    load(storage, key).unwrap_or_else(|err| {
        warn!(key, error = %err, "ignoring unreadable stored record");
        None
    })
}

/// Read a record, falling back to the default on any failure
pub fn load_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage + ?Sized,
{
    load_optional(storage, key).unwrap_or_default()
}

/// Encode and write a record
///
/// # Errors
/// Returns `StorageError` if encoding or the backend write fails.
pub fn save<T, S>(storage: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let text = serde_json::to_string(value).map_err(|source| StorageError::Json {
        key: key.to_owned(),
        source,
    })?;
    storage.write(key, &text)
}

/// Write a record, logging instead of failing
pub fn save_record<T, S>(storage: &mut S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    if let Err(err) = save(storage, key, value) {
        warn!(key, error = %err, "failed to persist record");
    }
}

/// Remove a record, logging instead of failing
pub fn remove_record<S: Storage + ?Sized>(storage: &mut S, key: &str) {
    if let Err(err) = storage.remove(key) {
        warn!(key, error = %err, "failed to remove record");
    }
}
