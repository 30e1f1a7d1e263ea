//! Content tree scanner
//!
//! # Error Handling Strategy
//!
//! The scanner follows the crate-wide **graceful degradation** approach:
//!
//! - **Per-level failures**: An unreadable directory at any of the four
//!   levels (year/month/day/entry) is skipped and its siblings keep scanning.
//! - **Missing root**: Treated as a valid empty content tree, not an error.
//! - **Malformed entries**: Zero or multiple markdown files in an entry
//!   directory make the entry ambiguous; the scanner reports that distinctly
//!   so the indexer can classify the skip.
//!
//! Nothing in this module aborts a scan; the worst outcome for any single
//! path is that it does not contribute to the index.

pub mod walk;

pub use walk::{markdown_file, scan_entries};
