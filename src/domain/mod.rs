//! Domain layer - Entry normalization and file format

pub mod entry;

pub use entry::{normalize, parse_entries, render_entries, trimmed};
