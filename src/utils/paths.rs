use std::path::{Component, Path, PathBuf};

/// Resolve `relative` against `root` and require the result to stay inside it.
///
/// Both sides are canonicalized, so symlinks pointing outside the root and
/// `..` components are rejected by the same containment check. Returns `None`
/// for anything that does not resolve to an existing descendant of the root;
/// callers treat that uniformly as "not found".
pub fn resolve_under_root(root: &Path, relative: &Path) -> Option<PathBuf> {
    let root = root.canonicalize().ok()?;
    let resolved = root.join(relative).canonicalize().ok()?;
    resolved.strip_prefix(&root).ok()?;
    Some(resolved)
}

/// Compute a path's identity relative to the content root.
///
/// The identity uses forward-slash separators regardless of platform and is
/// only produced when the resolved path is a descendant of the resolved root
/// (the same containment check as [`resolve_under_root`]).
pub fn relative_id(root: &Path, path: &Path) -> Option<String> {
    let root = root.canonicalize().ok()?;
    let resolved = path.canonicalize().ok()?;
    let rel = resolved.strip_prefix(&root).ok()?;

    let mut segments = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
            // Anything but plain segments means the path escaped the root
            _ => return None,
        }
    }
    Some(segments.join("/"))
}

/// Split a relative identity into its path segments.
pub fn id_segments(id: &str) -> Vec<&str> {
    id.split('/').filter(|segment| !segment.is_empty()).collect()
}
