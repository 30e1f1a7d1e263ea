//! Data models for the blog content index.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`PostSummary`] - One post as listed in the index
//! - [`PostDetail`] - A post with its full markdown body
//! - [`TagCount`] / [`ContentIndex`] - The aggregated index value
//! - [`ScannedEntry`] / [`EntryOutcome`] - Scanner output and per-entry results
//!
//! The index and post types use serde and serialize to the JSON shapes
//! consumed by the API wrapper.

pub mod index;
pub mod post;
pub mod scan;

pub use index::{ContentIndex, TagCount};
pub use post::{PostDetail, PostSummary};
pub use scan::{EntryOutcome, ScannedEntry};
