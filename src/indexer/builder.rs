use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::models::{ContentIndex, EntryOutcome, PostSummary, ScannedEntry, TagCount};
use crate::parsers::{extract_tags, extract_title};
use crate::scanner::{markdown_file, scan_entries};
use crate::utils::relative_id;

fn classify_entry(root: &Path, entry: ScannedEntry) -> EntryOutcome {
    let ScannedEntry { date_path, entry_dir } = entry;

    let md_path = match markdown_file(&entry_dir) {
        Ok(Some(path)) => path,
        Ok(None) => return EntryOutcome::SkippedMalformed { entry_dir },
        Err(_) => return EntryOutcome::SkippedIo { entry_dir },
    };

    let markdown = match fs::read_to_string(&md_path) {
        Ok(text) => text,
        Err(_) => return EntryOutcome::SkippedIo { entry_dir },
    };

    // Identity requires the entry to still resolve inside the root; a
    // race-deleted entry fails canonicalization here and is skipped
    let Some(id) = relative_id(root, &entry_dir) else {
        return EntryOutcome::SkippedIo { entry_dir };
    };

    let fallback =
        entry_dir.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    let title = extract_title(&markdown, &fallback);
    let tags = extract_tags(&markdown);

    EntryOutcome::Included(PostSummary { id, title, date_path, tags })
}

/// Scan the content tree and classify every entry.
///
/// Returns one [`EntryOutcome`] per entry directory, in scan order. The
/// index only keeps the `Included` outcomes, but exposing the skipped ones
/// keeps the skip policy testable: a malformed entry (zero or several
/// markdown files) and an I/O casualty are distinct results, not silent
/// absences.
pub fn scan_posts(root: &Path) -> Vec<EntryOutcome> {
    let entries: Vec<ScannedEntry> = scan_entries(root).collect();
    entries.into_par_iter().map(|entry| classify_entry(root, entry)).collect()
}

/// Build the complete index from the current filesystem state.
///
/// Full rescan every time: walks the dated hierarchy, reads each entry's
/// markdown document, derives titles and tags, and aggregates the sorted
/// post list plus the tag frequency table. Entries that cannot be read are
/// skipped; a missing root produces an empty index. The result is a pure
/// function of file contents at call time.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use blog_content_index::build_index;
///
/// let index = build_index(Path::new("/content"));
/// println!("{} posts, {} tags", index.posts.len(), index.tags.len());
/// ```
pub fn build_index(root: &Path) -> ContentIndex {
    let outcomes = scan_posts(root);

    let mut posts = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for outcome in outcomes {
        match outcome {
            EntryOutcome::Included(summary) => {
                for tag in &summary.tags {
                    *counts.entry(tag.clone()).or_default() += 1;
                }
                posts.push(summary);
            }
            EntryOutcome::SkippedMalformed { .. } | EntryOutcome::SkippedIo { .. } => skipped += 1,
        }
    }

    if skipped > 0 {
        eprintln!("Indexed {} posts ({} entries skipped)", posts.len(), skipped);
    }

    // Newest first; lexicographic on the date bucket, then title
    posts.sort_by(|a, b| {
        (b.date_path.as_str(), b.title.as_str()).cmp(&(a.date_path.as_str(), a.title.as_str()))
    });

    let mut tags: Vec<TagCount> =
        counts.into_iter().map(|(tag, count)| TagCount { tag, count }).collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));

    ContentIndex { posts, tags }
}
