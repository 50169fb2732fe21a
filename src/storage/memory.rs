use super::{Storage, StorageError};
use rustc_hash::FxHashMap;
use std::io;

/// In-memory store; `failing()` builds one whose every call errors
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, String>,
    fail: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::Io {
                key: key.to_owned(),
                source: io::Error::other("storage unavailable"),
            });
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
