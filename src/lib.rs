//! entryfile - Persistent case-insensitive entry lists
//!
//! Keeps a set of normalized string entries in memory, mirrored to a
//! newline-separated text file. Suited to allow-lists and blocklists that are
//! loaded once and updated incrementally from a single process.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::EntryStore;
pub use error::EntryError;
