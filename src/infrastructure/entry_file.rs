//! File system access for the backing list file

use crate::error::Result;
use crate::infrastructure::RewriteMode;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Abstract backing file for an entry store
pub trait EntryFile {
    /// Location of the file, used in log events
    fn path(&self) -> &Path;

    /// Read the whole file. Returns `Ok(None)` when it does not exist.
    fn read_all(&self) -> Result<Option<String>>;

    /// Create the file with no content
    fn create_empty(&self) -> Result<()>;

    /// Append one line, separated from existing content by a newline
    fn append_line(&self, line: &str) -> Result<()>;

    /// Replace the whole file content
    fn write_all(&self, content: &str) -> Result<()>;
}

/// `std::fs` implementation of EntryFile
#[derive(Debug, Clone)]
pub struct FsEntryFile {
    path: PathBuf,
    rewrite: RewriteMode,
}

impl FsEntryFile {
    /// Create a backing file handle that overwrites in place on rewrite
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FsEntryFile {
            path: path.into(),
            rewrite: RewriteMode::default(),
        }
    }

    /// Select how `write_all` replaces the file
    pub fn with_rewrite_mode(mut self, rewrite: RewriteMode) -> Self {
        self.rewrite = rewrite;
        self
    }

    pub fn rewrite_mode(&self) -> RewriteMode {
        self.rewrite
    }

    /// Write to a sibling temp file, then rename it over the target.
    /// The temp file is removed if the rename fails.
    fn write_atomic(&self, content: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.entryfile-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl EntryFile for FsEntryFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Option<String>> {
        // Invalid UTF-8 sequences become U+FFFD instead of failing the load
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn create_empty(&self) -> Result<()> {
        fs::write(&self.path, "")?;
        Ok(())
    }

    fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        if file.metadata()?.len() > 0 {
            file.write_all(b"\n")?;
        }

        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn write_all(&self, content: &str) -> Result<()> {
        match self.rewrite {
            RewriteMode::Overwrite => {
                fs::write(&self.path, content)?;
                Ok(())
            }
            RewriteMode::Atomic => self.write_atomic(content),
        }
    }
}
