//! Integration tests for the ingestion library
//!
//! Tests are organized by topic:
//! - `baseline` - the fixed two-row baseline file reader
//! - `series` - the long-format scenario series reader
//! - `pipeline` - the full ingestion pass and header cross-checks

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

mod series;

/// Write a fixture file into `dir` and return its path.
fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
