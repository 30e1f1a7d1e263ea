use std::path::PathBuf;

use crate::models::PostSummary;

/// One entry directory found by the scanner, four levels below the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// `year/month/day` from the directory names above the entry.
    pub date_path: String,
    pub entry_dir: PathBuf,
}

/// Per-entry result of an index scan.
///
/// The index itself only keeps the `Included` summaries; the skipped variants
/// exist so the skip policy is observable rather than an implicit side effect
/// of swallowed errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Included(PostSummary),
    /// Zero or more than one markdown file in the entry directory.
    SkippedMalformed { entry_dir: PathBuf },
    /// Directory listing, file read, or path resolution failed.
    SkippedIo { entry_dir: PathBuf },
}

impl EntryOutcome {
    pub fn included(&self) -> Option<&PostSummary> {
        match self {
            EntryOutcome::Included(summary) => Some(summary),
            _ => None,
        }
    }
}
