use serde::{Deserialize, Serialize};

use crate::models::PostSummary;

/// How often a tag occurs across the indexed posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// The complete in-memory index of the content tree.
///
/// `posts` is sorted by (date_path, title) descending, `tags` by
/// (count descending, tag ascending). Serializes to the wire shape
/// `{"posts": [...], "tags": [...]}` consumed by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIndex {
    pub posts: Vec<PostSummary>,
    pub tags: Vec<TagCount>,
}

impl ContentIndex {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
