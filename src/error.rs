//! Error types for entryfile

use thiserror::Error;

/// Main error type for entry store operations
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Cannot store an empty entry")]
    EmptyEntry,

    #[error("Entry already exists: {0}")]
    AlreadyExists(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EntryError {
    /// True when the call was rejected before touching memory or disk
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EntryError::EmptyEntry | EntryError::AlreadyExists(_) | EntryError::NotFound(_)
        )
    }

    /// True when a mutation may have been applied in memory without the
    /// matching file update. Callers should `reload()` the store.
    pub fn may_have_diverged(&self) -> bool {
        matches!(self, EntryError::Io(_))
    }
}

/// Result type using EntryError
pub type Result<T> = std::result::Result<T, EntryError>;
