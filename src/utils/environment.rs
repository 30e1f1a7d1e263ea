use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const CONTENT_DIR_VAR: &str = "BLOG_CONTENT_DIR";
const CACHE_SECONDS_VAR: &str = "BLOG_CACHE_SECONDS";

const DEFAULT_CONTENT_DIR: &str = "/content";
const DEFAULT_CACHE_SECONDS: u64 = 3600;

/// Get the content root directory (`BLOG_CONTENT_DIR`, default `/content`)
pub fn content_root() -> PathBuf {
    env::var_os(CONTENT_DIR_VAR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR))
}

/// Get the index cache TTL (`BLOG_CACHE_SECONDS`, default 3600)
///
/// # Errors
///
/// Returns an error if the variable is set but does not parse as whole seconds.
pub fn cache_ttl() -> Result<Duration> {
    match env::var(CACHE_SECONDS_VAR) {
        Ok(raw) => {
            let seconds: u64 = raw
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got {:?}", CACHE_SECONDS_VAR, raw))?;
            Ok(Duration::from_secs(seconds))
        }
        Err(_) => Ok(Duration::from_secs(DEFAULT_CACHE_SECONDS)),
    }
}
