//! Read-through composition of fingerprint, cache, and index builder.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Fingerprint, IndexCache, compute_fingerprint};
use crate::indexer::{build_index, load_post};
use crate::models::{ContentIndex, PostDetail};

/// Owns a content root and the cache for its index.
///
/// Every [`index`](ContentService::index) call fingerprints the tree first,
/// so a mutation observed by the filesystem invalidates the cached value even
/// inside the TTL window. Single-post reads always go to the filesystem.
///
/// Construct one per content root and share it by reference; the cache is a
/// component of the service, not process-global state.
#[derive(Debug)]
pub struct ContentService {
    root: PathBuf,
    cache: IndexCache,
}

impl ContentService {
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self { root: root.into(), cache: IndexCache::new(ttl) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current fingerprint of the content tree.
    pub fn fingerprint(&self) -> Fingerprint {
        compute_fingerprint(&self.root)
    }

    /// The index for the current content state, cached when possible.
    ///
    /// Misses (empty slot, expired TTL, or changed fingerprint) trigger a
    /// full synchronous rescan; concurrent misses share a single rebuild.
    pub fn index(&self) -> Arc<ContentIndex> {
        let fingerprint = self.fingerprint();
        self.cache.get_or_rebuild(fingerprint, || build_index(&self.root))
    }

    /// Load one post fresh from disk, bypassing the cache.
    pub fn post(&self, id: &str) -> Option<PostDetail> {
        load_post(&self.root, id)
    }

    /// Drop the cached index; the next [`index`](ContentService::index) call
    /// rebuilds unconditionally.
    pub fn invalidate(&self) {
        self.cache.clear();
    }
}
