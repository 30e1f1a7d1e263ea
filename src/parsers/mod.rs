//! Markdown text parsers for post metadata
//!
//! Titles and tags are derived from the raw markdown text, never from
//! rendered output. The rules are deliberately narrow: a title only comes
//! from a leading `# ` heading, and tags follow a restricted hashtag grammar
//! (`#word` optionally extended by `-word` groups). Everything else in the
//! document is left alone; rendering belongs to the consumer.

pub mod markdown;

pub use markdown::{extract_tags, extract_title};
