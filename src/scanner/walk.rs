use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::ScannedEntry;

/// Subdirectories of `dir`, skipping anything unreadable.
///
/// A failed `read_dir`, a failed entry read, or a failed file-type probe all
/// degrade to "no such child" so one bad level never aborts a scan.
fn subdirs(dir: &Path) -> impl Iterator<Item = PathBuf> + use<> {
    fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
}

fn dir_name(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}

fn is_year_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Lazily walk the `year/month/day/entry` hierarchy under `root`.
///
/// Year directories must have purely numeric names; month, day, and entry
/// directories are taken as-is. Each yielded entry carries the
/// `year/month/day` date bucket built from the directory names. A missing
/// root yields an empty sequence, and unreadable directories at any level are
/// skipped, not errors.
pub fn scan_entries(root: &Path) -> impl Iterator<Item = ScannedEntry> + use<> {
    subdirs(root).filter(|year_dir| is_year_name(&dir_name(year_dir))).flat_map(|year_dir| {
        let year = dir_name(&year_dir);
        subdirs(&year_dir).flat_map(move |month_dir| {
            let month = dir_name(&month_dir);
            let year = year.clone();
            subdirs(&month_dir).flat_map(move |day_dir| {
                let date_path = format!("{}/{}/{}", year, month, dir_name(&day_dir));
                subdirs(&day_dir)
                    .map(move |entry_dir| ScannedEntry { date_path: date_path.clone(), entry_dir })
            })
        })
    })
}

/// Locate the markdown document of an entry directory.
///
/// Succeeds with `Ok(Some(..))` only when the directory holds exactly one
/// file with a case-insensitive `.md` extension. Zero or several candidates
/// yield `Ok(None)` (the entry is malformed, not an error); a failed
/// directory listing surfaces as `Err` for the caller to classify.
pub fn markdown_file(entry_dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut found = None;
    for entry in fs::read_dir(entry_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let is_markdown =
            path.extension().map(|ext| ext.eq_ignore_ascii_case("md")).unwrap_or(false);
        if is_markdown {
            if found.is_some() {
                // ambiguous: more than one markdown file
                return Ok(None);
            }
            found = Some(path);
        }
    }
    Ok(found)
}
