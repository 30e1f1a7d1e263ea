//! Index building and single-post lookup
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Per-entry failures**: An entry that cannot be read, decoded, or
//!   resolved is classified as a skipped [`EntryOutcome`](crate::models::EntryOutcome)
//!   and never aborts the scan. Siblings keep indexing.
//! - **Absence**: A missing root is an empty index, not an error; a bad post
//!   id is `None`, not an error. Traversal-guard rejections are deliberately
//!   indistinguishable from missing posts.
//! - **Summary reporting**: When entries are skipped, a one-line count goes
//!   to stderr so the skip policy is visible without being fatal.
//!
//! Nothing here propagates an error to the caller; the index contract only
//! surfaces what was successfully included.

pub mod builder;
pub mod lookup;

pub use builder::{build_index, scan_posts};
pub use lookup::load_post;
