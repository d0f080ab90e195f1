use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const USGS_FEED_CACHE_KEY: &str = "feeds:usgs";

/// Feed cache settings resolved from config and CLI flags.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub enabled: bool, // false when --no-cache
    pub ttl: Duration,
}

/// Get the platform-appropriate cache directory for phobetron
pub fn get_cache_path() -> PathBuf {
    dirs::cache_dir()
        .map(|p| p.join("phobetron/feed-cache"))
        .unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}/.cache/phobetron/feed-cache",
                std::env::var("HOME").unwrap_or_default()
            ))
        })
}

/// Clear the feed cache directory. Clearing a cache that was never
/// written is not an error.
pub fn clear_cache(cache_path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(cache_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("Failed to remove cache directory"),
    }
}

/// Cached feed body with fetch timestamp
#[derive(Debug, Serialize, Deserialize)]
pub struct CachedFeed {
    pub body: String,
    pub fetched_at: u64, // Unix timestamp
}

/// Read the cached USGS feed body from disk
pub fn read_cached_feed(cache_path: &Path) -> Option<CachedFeed> {
    let bytes = cacache::read_sync(cache_path, USGS_FEED_CACHE_KEY).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Write a fetched feed body to the cache
pub fn write_cached_feed(cache_path: &Path, body: &str) -> Result<()> {
    let entry = CachedFeed {
        body: body.to_string(),
        fetched_at: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs(),
    };
    let json = serde_json::to_vec(&entry)?;
    cacache::write_sync(cache_path, USGS_FEED_CACHE_KEY, &json)?;
    Ok(())
}

/// Check if a cached feed is still fresh for the configured TTL
pub fn is_cache_fresh(entry: &CachedFeed, ttl: Duration) -> bool {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    now.saturating_sub(entry.fetched_at) < ttl.as_secs()
}
