use serde::{Deserialize, Serialize};

/// One post as it appears in the index listing.
///
/// The `id` is the entry directory's path relative to the content root with
/// forward-slash separators, e.g. `2026/February/10/hello-world`. It doubles
/// as the external identifier accepted by [`crate::indexer::load_post`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    /// Date bucket derived from the directory names, e.g. `2026/February/10`.
    pub date_path: String,
    /// Hashtags found in the markdown body, lowercased, first occurrence first.
    pub tags: Vec<String>,
}

/// A single post with its full markdown body.
///
/// Built fresh from the filesystem on every lookup; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub date_path: String,
    pub markdown: String,
}
