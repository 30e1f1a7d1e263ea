//! Content-aware caching of the built index
//!
//! Two pieces cooperate here:
//!
//! - [`compute_fingerprint`] sweeps the content tree and reduces its
//!   modification state to a single comparable [`Fingerprint`].
//! - [`IndexCache`] holds at most one built index, valid only while a TTL
//!   window holds *and* the current fingerprint equals the one it was stored
//!   under.
//!
//! Every index request pays one stat sweep; a full rescan (directory walk
//! plus file reads) only happens when the sweep or the TTL says the cached
//! value is no longer valid.

pub mod fingerprint;
pub mod store;

pub use fingerprint::{Fingerprint, compute_fingerprint};
pub use store::IndexCache;
