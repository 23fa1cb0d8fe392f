//! Infrastructure layer - File I/O and configuration

pub mod config;
pub mod entry_file;

pub use config::{RewriteMode, StoreConfig};
pub use entry_file::{EntryFile, FsEntryFile};
