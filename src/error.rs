//! Error types.
//!
//! Nothing in this crate is fatal: storage and config failures degrade to
//! defaults at the call site. These enums exist so the degrade path can log
//! what went wrong.

/// Failure reported by a [`crate::persistence::KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend is not available (e.g. local storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading a key failed.
    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },
    /// Writing a key failed (quota exceeded, private mode, ...).
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Error returned when saving the note collection.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error returned by [`crate::config::Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
