use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

/// Deepest fingerprinted level: files inside `root/year/month/day/entry/`.
const FINGERPRINT_DEPTH: usize = 5;

/// Scalar summary of the content tree's mutation state.
///
/// Holds the newest modification instant observed anywhere in the tree, in
/// nanoseconds since the Unix epoch. Two fingerprints compare equal exactly
/// when no visible mutation happened between the two sweeps (given a
/// monotonic filesystem clock with sufficient resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(i64);

impl Fingerprint {
    /// Sentinel for a content root that does not exist. Distinct from any
    /// real modification instant.
    pub const ABSENT: Fingerprint = Fingerprint(0);

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    /// The newest observed modification instant, if the root existed.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        if *self == Self::ABSENT {
            return None;
        }
        Some(DateTime::from_timestamp_nanos(self.0))
    }

    #[cfg(test)]
    pub(crate) fn from_nanos(nanos: i64) -> Self {
        Fingerprint(nanos)
    }
}

fn mtime_nanos(mtime: SystemTime) -> i64 {
    // mtimes before the epoch collapse into the sentinel range; nothing a
    // blog content tree produces in practice
    mtime
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos().min(i64::MAX as u128) as i64)
        .unwrap_or(0)
}

/// Compute the current fingerprint of the content tree under `root`.
///
/// Sweeps the root, the four directory levels below it, and the files inside
/// entry directories, taking the maximum mtime. The sweep is deliberately
/// more permissive than the index scanner: no numeric-year filter and no
/// markdown-file requirement, so a change to a co-located asset also moves
/// the fingerprint. Unreadable paths do not contribute; a missing root
/// returns [`Fingerprint::ABSENT`].
pub fn compute_fingerprint(root: &Path) -> Fingerprint {
    WalkDir::new(root)
        .max_depth(FINGERPRINT_DEPTH)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter_map(|metadata| metadata.modified().ok())
        .map(mtime_nanos)
        .max()
        .map(Fingerprint)
        .unwrap_or(Fingerprint::ABSENT)
}
