use std::path::PathBuf;
use tempfile::TempDir;

/// Route store tracing output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Scratch directory plus the path of a list file inside it
pub fn list_file(name: &str) -> (TempDir, PathBuf) {
    init_tracing();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    (temp, path)
}
