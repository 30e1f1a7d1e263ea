pub mod environment;
pub mod paths;

pub use environment::{cache_ttl, content_root};
pub use paths::{id_segments, relative_id, resolve_under_root};
