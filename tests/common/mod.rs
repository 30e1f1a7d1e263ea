//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Builder for creating test content trees
///
/// Lays out the `year/month/day/entry/` hierarchy the scanner expects, with
/// one markdown file per entry plus optional co-located assets.
pub struct ContentTreeBuilder {
    temp_dir: TempDir,
}

impl ContentTreeBuilder {
    /// Create a new builder with an empty content root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the content root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add an entry directory with a single markdown file
    pub fn with_post(self, year: &str, month: &str, day: &str, slug: &str, markdown: &str) -> Self {
        let entry = self.entry_dir(year, month, day, slug);
        fs::create_dir_all(&entry).expect("Failed to create entry dir");
        fs::write(entry.join("post.md"), markdown).expect("Failed to write markdown");
        self
    }

    /// Add an entry directory without any markdown file
    pub fn with_empty_entry(self, year: &str, month: &str, day: &str, slug: &str) -> Self {
        let entry = self.entry_dir(year, month, day, slug);
        fs::create_dir_all(&entry).expect("Failed to create entry dir");
        self
    }

    /// Add an arbitrary file at a path relative to the content root
    pub fn with_file(self, relative: &str, contents: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(path, contents).expect("Failed to write file");
        self
    }

    /// Absolute path of an entry directory
    pub fn entry_dir(&self, year: &str, month: &str, day: &str, slug: &str) -> PathBuf {
        self.temp_dir.path().join(year).join(month).join(day).join(slug)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ContentTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Push a file's mtime into the future so a fingerprint sweep must observe a
/// change, regardless of the filesystem's timestamp granularity.
pub fn touch_future(path: &Path, ahead: Duration) {
    let file = fs::File::options().write(true).open(path).expect("Failed to open file");
    file.set_modified(SystemTime::now() + ahead).expect("Failed to set mtime");
}
