//! Case-insensitive entry set mirrored to a plain-text file
//!
//! Lookups go through an in-memory set of normalized entries. Inserts are
//! appended to the file as a single line; removals rewrite the whole file from
//! the in-memory set. A single store-wide mutex serializes every operation,
//! file I/O included.
//!
//! When a file write fails after the in-memory change was applied, the change
//! is not rolled back. The returned error reports `may_have_diverged()` and
//! [`EntryStore::reload`] restores agreement with the file.

use crate::domain::{normalize, parse_entries, render_entries, trimmed};
use crate::error::{EntryError, Result};
use crate::infrastructure::{EntryFile, FsEntryFile, StoreConfig};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Persistent set of case-insensitive string entries
#[derive(Debug)]
pub struct EntryStore<F: EntryFile = FsEntryFile> {
    file: F,
    entries: Mutex<HashSet<String>>,
}

impl EntryStore<FsEntryFile> {
    /// Open the list file at `path`, creating it empty if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_file(FsEntryFile::new(path))
    }

    /// Open the list file described by a config
    pub fn open_with_config(config: &StoreConfig) -> Result<Self> {
        Self::with_file(FsEntryFile::new(&config.path).with_rewrite_mode(config.rewrite))
    }
}

impl<F: EntryFile> EntryStore<F> {
    /// Build a store over any backing file and load its entries
    pub fn with_file(file: F) -> Result<Self> {
        let entries = load(&file)?;
        Ok(EntryStore {
            file,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Add an entry. The trimmed form, with its original case, is appended to
    /// the file.
    pub fn add(&self, item: &str) -> Result<()> {
        let mut entries = self.lock();

        let item = trimmed(item).ok_or(EntryError::EmptyEntry)?;
        let key = item.to_lowercase();

        if entries.contains(&key) {
            return Err(EntryError::AlreadyExists(key));
        }

        entries.insert(key);
        self.file.append_line(item)?;

        tracing::debug!(
            path = %self.file.path().display(),
            entry = item,
            entries = entries.len(),
            "Appended entry"
        );
        Ok(())
    }

    /// Remove an entry and rewrite the file from the remaining set
    pub fn remove(&self, item: &str) -> Result<()> {
        let mut entries = self.lock();

        let key = normalize(item).ok_or(EntryError::EmptyEntry)?;

        if !entries.remove(&key) {
            return Err(EntryError::NotFound(key));
        }

        let content = render_entries(entries.iter());
        self.file.write_all(&content)?;

        tracing::debug!(
            path = %self.file.path().display(),
            entry = %key,
            entries = entries.len(),
            bytes = content.len(),
            "Rewrote entry file"
        );
        Ok(())
    }

    /// Case-insensitive membership test. Blank input is never contained.
    pub fn contains(&self, item: &str) -> bool {
        let entries = self.lock();
        normalize(item).is_some_and(|key| entries.contains(&key))
    }

    /// Snapshot of the normalized entries, in no particular order
    pub fn items(&self) -> impl Iterator<Item = String> {
        let snapshot: Vec<String> = self.lock().iter().cloned().collect();
        snapshot.into_iter()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Replace the in-memory set with the current file content
    pub fn reload(&self) -> Result<()> {
        let mut entries = self.lock();
        let previous = entries.len();
        *entries = load(&self.file)?;

        tracing::debug!(
            path = %self.file.path().display(),
            previous,
            entries = entries.len(),
            "Reloaded entry file"
        );
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // The set is valid after any panic, so a poisoned lock is still usable
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn load<F: EntryFile>(file: &F) -> Result<HashSet<String>> {
    match file.read_all()? {
        Some(content) => {
            let entries = parse_entries(&content);
            tracing::debug!(
                path = %file.path().display(),
                entries = entries.len(),
                bytes = content.len(),
                "Loaded entry file"
            );
            Ok(entries)
        }
        None => {
            file.create_empty()?;
            tracing::debug!(path = %file.path().display(), "Created empty entry file");
            Ok(HashSet::new())
        }
    }
}
