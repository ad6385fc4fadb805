//! Note persistence over a key-value store.
//!
//! DESIGN
//! ======
//! The whole collection lives under a single key as a JSON array and is
//! overwritten wholesale on every mutation. There are no partial updates and
//! no schema versioning. The browser backend is `localStorage`; tests and
//! non-browser hosts use [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Loading never fails: a missing key, an unreadable backend or unparsable
//! JSON all mean "no prior state" and yield an empty collection. Saving
//! reports its error so the caller can log it; the in-memory store stays
//! authoritative either way.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::cell::RefCell;
use std::collections::HashMap;

use log::{info, warn};

use crate::doc::Note;
use crate::error::{PersistError, StorageError};

/// A string key-value backend such as browser `localStorage`.
pub trait KeyValueStore {
    /// Read the value under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the note collection stored under `key`.
///
/// Any failure is logged and treated as an empty collection.
pub fn load_notes(store: &dyn KeyValueStore, key: &str) -> Vec<Note> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("note storage unreadable, starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(notes) => {
            info!("loaded {} notes from {key}", notes.len());
            notes
        }
        Err(e) => {
            warn!("stored notes under {key} are not valid, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Overwrite the collection stored under `key` with `notes`.
///
/// # Errors
///
/// Returns [`PersistError::Serialize`] if the notes cannot be encoded and
/// [`PersistError::Storage`] if the backend rejects the write.
pub fn save_notes(store: &dyn KeyValueStore, key: &str, notes: &[Note]) -> Result<(), PersistError> {
    let raw = serde_json::to_string(notes)?;
    store.set(key, &raw)?;
    Ok(())
}
