use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::cache::Fingerprint;
use crate::models::ContentIndex;

/// Single-slot cache for the built index, valid only while both the TTL
/// window and the fingerprint match hold.
///
/// The cache has two states: empty, or holding one `(value, fingerprint,
/// created)` triple. A [`get`](IndexCache::get) behaves as a miss whenever
/// the slot is empty, expired, or keyed by a different fingerprint; callers
/// cannot tell those cases apart. Values are never mutated in place, only
/// replaced wholesale by [`set`](IndexCache::set).
///
/// The cache is an owned component: construct one, share it by reference.
#[derive(Debug)]
pub struct IndexCache {
    ttl: Duration,
    slot: Mutex<Option<CacheEntry>>,
    // Serializes rebuilds so concurrent misses don't scan the tree in parallel
    rebuild: Mutex<()>,
}

#[derive(Debug)]
struct CacheEntry {
    value: Arc<ContentIndex>,
    fingerprint: Fingerprint,
    created: Instant,
}

fn recover<'a, T>(result: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>) -> MutexGuard<'a, T> {
    // A panicking rebuild must not wedge the cache; the slot is always in a
    // consistent state since it is only ever replaced wholesale
    result.unwrap_or_else(PoisonError::into_inner)
}

impl IndexCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: Mutex::new(None), rebuild: Mutex::new(()) }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached index if it is fresh for `fingerprint`.
    pub fn get(&self, fingerprint: Fingerprint) -> Option<Arc<ContentIndex>> {
        let slot = recover(self.slot.lock());
        let entry = slot.as_ref()?;
        if entry.created.elapsed() >= self.ttl || entry.fingerprint != fingerprint {
            return None;
        }
        Some(Arc::clone(&entry.value))
    }

    /// Store `value` keyed by `fingerprint`, starting a fresh TTL window.
    pub fn set(&self, value: Arc<ContentIndex>, fingerprint: Fingerprint) {
        let entry = CacheEntry { value, fingerprint, created: Instant::now() };
        *recover(self.slot.lock()) = Some(entry);
    }

    /// Drop any cached value.
    pub fn clear(&self) {
        *recover(self.slot.lock()) = None;
    }

    /// Read-through: return the cached index for `fingerprint` or rebuild it.
    ///
    /// Concurrent callers that miss are serialized on a rebuild lock; whoever
    /// wins populates the slot and the waiters pick up its value on the
    /// re-check instead of scanning again.
    pub fn get_or_rebuild<F>(&self, fingerprint: Fingerprint, rebuild: F) -> Arc<ContentIndex>
    where
        F: FnOnce() -> ContentIndex,
    {
        if let Some(value) = self.get(fingerprint) {
            return value;
        }

        let _rebuilding = recover(self.rebuild.lock());
        if let Some(value) = self.get(fingerprint) {
            return value;
        }

        let value = Arc::new(rebuild());
        self.set(Arc::clone(&value), fingerprint);
        value
    }
}
