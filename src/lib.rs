//! Blog Content Index - Content-aware caching index over a dated blog tree
//!
//! This library scans a directory tree of dated blog-post folders
//! (`year/month/day/entry/`, one markdown document per entry), builds an
//! in-memory index of post summaries and tag counts, and serves single posts.
//! It supports:
//!
//! - Lazy scanning of the four-level content hierarchy
//! - Title and hashtag extraction from markdown text
//! - A single-slot index cache invalidated by TTL or a content fingerprint
//! - Traversal-safe single-post lookup by relative id
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use blog_content_index::ContentService;
//!
//! let service = ContentService::new("/content", Duration::from_secs(3600));
//! let index = service.index();
//! println!("Indexed {} posts", index.posts.len());
//! ```

pub mod cache;
pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod scanner;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use cache::{Fingerprint, IndexCache, compute_fingerprint};
pub use indexer::{build_index, load_post};
pub use models::{ContentIndex, PostDetail, PostSummary, TagCount};
pub use service::ContentService;
