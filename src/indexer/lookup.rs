use std::fs;
use std::path::Path;

use crate::models::PostDetail;
use crate::parsers::extract_title;
use crate::scanner::markdown_file;
use crate::utils::{id_segments, relative_id, resolve_under_root};

/// Load a single post by its relative identity, reading the filesystem fresh.
///
/// The identity is resolved against the root and must stay inside it; an id
/// that escapes (via `..`, an absolute path, or a symlink) is reported as
/// not found, indistinguishable from a missing post. The resolved path must
/// be a directory holding exactly one markdown file. This bypasses the index
/// cache entirely.
pub fn load_post(root: &Path, id: &str) -> Option<PostDetail> {
    let resolved = resolve_under_root(root, Path::new(id))?;
    if !resolved.is_dir() {
        return None;
    }

    let md_path = markdown_file(&resolved).ok().flatten()?;
    let markdown = fs::read_to_string(&md_path).ok()?;

    // Date bucket from the first three segments of the canonical relative
    // path; entries above that depth get an empty bucket
    let rel = relative_id(root, &resolved)?;
    let segments = id_segments(&rel);
    let date_path = if segments.len() >= 3 { segments[..3].join("/") } else { String::new() };

    let fallback =
        resolved.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
    let title = extract_title(&markdown, &fallback);

    Some(PostDetail { id: id.to_string(), title, date_path, markdown })
}
