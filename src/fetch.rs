use anyhow::Result;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::Config;
use crate::events::{mock, Event};
use crate::sources::cache::CacheConfig;
use crate::sources::{file, usgs};

/// Per-run source selection, resolved from CLI flags and config.
#[derive(Debug, Clone, Default)]
pub struct GatherOptions {
    /// Use the deterministic mock set instead of remote feeds.
    pub use_mock: bool,
    /// Event file passed on the CLI; overrides the configured one.
    pub events_file: Option<PathBuf>,
    /// Bypass the feed cache (--no-cache).
    pub no_cache: bool,
    pub verbose: bool,
}

/// Gather events from every enabled source, tolerating partial failure.
///
/// Sources run concurrently. A failed source is reported and skipped; only
/// when every source fails does the whole gather fail. Events are
/// deduplicated by id, first occurrence wins.
pub async fn gather_events(config: &Config, opts: &GatherOptions) -> Result<Vec<Event>> {
    let mut futures: FuturesUnordered<BoxFuture<'_, (String, Result<Vec<Event>>)>> =
        FuturesUnordered::new();

    if opts.use_mock {
        futures.push(Box::pin(async {
            ("mock".to_string(), Ok(mock::mock_events()))
        }));
    }

    let events_path = opts
        .events_file
        .clone()
        .or_else(|| config.events_file().map(PathBuf::from));
    if let Some(path) = events_path {
        futures.push(Box::pin(async move {
            let result = file::load_events(&path);
            (format!("file:{}", path.display()), result)
        }));
    }

    if config.usgs_enabled() && !opts.use_mock {
        let feed_url = config.usgs_feed_url();
        let cache = CacheConfig {
            enabled: !opts.no_cache,
            ttl: config.cache_ttl(),
        };
        let verbose = opts.verbose;
        futures.push(Box::pin(async move {
            let result = usgs::fetch_events(&feed_url, &cache, verbose).await;
            ("usgs".to_string(), result)
        }));
    }

    if futures.is_empty() {
        anyhow::bail!(
            "No event sources enabled. Pass --mock or --events, or enable the USGS feed in config."
        );
    }

    let source_count = futures.len();
    let mut all_events = Vec::new();
    let mut any_succeeded = false;

    while let Some((name, result)) = futures.next().await {
        match result {
            Ok(events) => {
                if opts.verbose {
                    eprintln!("  Source {}: {} events", name, events.len());
                }
                all_events.extend(events);
                any_succeeded = true;
            }
            Err(e) => {
                eprintln!("Source failed: {} - {}", name, e);
            }
        }
    }

    if !any_succeeded && source_count > 0 {
        anyhow::bail!("All event sources failed.");
    }

    // Deduplicate by id (the same event may arrive from multiple sources)
    let mut seen_ids = HashSet::new();
    let unique_events: Vec<_> = all_events
        .into_iter()
        .filter(|event| seen_ids.insert(event.id().to_string()))
        .collect();

    if opts.verbose {
        eprintln!("After deduplication: {} unique events", unique_events.len());
    }

    Ok(unique_events)
}
