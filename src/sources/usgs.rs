use anyhow::{anyhow, Context, Result};
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use crate::events::{Event, EventSignificance, TerrestrialEvent, TerrestrialKind};

use super::cache::{is_cache_fresh, read_cached_feed, write_cached_feed, CacheConfig};

/// USGS significant-earthquakes feed for the past 30 days.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_month.geojson";

#[derive(Debug, Deserialize)]
struct Feed {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    id: String,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    /// Milliseconds since the Unix epoch.
    time: i64,
}

/// Map Richter magnitude to an event significance tier.
pub fn significance_for_magnitude(magnitude: f64) -> EventSignificance {
    if magnitude >= 7.5 {
        EventSignificance::Critical
    } else if magnitude >= 6.5 {
        EventSignificance::High
    } else if magnitude >= 5.5 {
        EventSignificance::Medium
    } else {
        EventSignificance::Low
    }
}

/// Decode a USGS GeoJSON body into terrestrial earthquake events.
pub fn parse_feed(body: &str) -> Result<Vec<Event>> {
    let feed: Feed = serde_json::from_str(body).context("Failed to parse USGS GeoJSON feed")?;

    let mut events = Vec::with_capacity(feed.features.len());
    for feature in feed.features {
        let date = Utc
            .timestamp_millis_opt(feature.properties.time)
            .single()
            .ok_or_else(|| anyhow!("Invalid timestamp in USGS feature {}", feature.id))?;

        events.push(Event::Terrestrial(TerrestrialEvent {
            id: format!("usgs-{}", feature.id),
            date,
            kind: TerrestrialKind::Earthquake,
            location: feature.properties.place,
            magnitude: feature.properties.mag,
            significance: feature.properties.mag.map(significance_for_magnitude),
        }));
    }

    Ok(events)
}

async fn fetch_feed_body(feed_url: &str) -> Result<String> {
    // Retry strategy: exponential backoff with 3 attempts
    let retry_strategy = ExponentialBackoff::from_millis(100)
        .max_delay(std::time::Duration::from_secs(5))
        .take(3);

    let client = reqwest::Client::new();
    let body = Retry::spawn(retry_strategy, || async {
        let response = client
            .get(feed_url)
            .header("User-Agent", "phobetron")
            .send()
            .await
            .context("Failed to reach the USGS feed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("USGS feed returned HTTP {}", status));
        }

        response
            .text()
            .await
            .context("Failed to read the USGS feed body")
    })
    .await?;

    Ok(body)
}

/// Fetch earthquake events from the USGS feed.
///
/// A fresh cached body short-circuits the network entirely. When the fetch
/// fails, a stale cached body is used as fallback before giving up.
pub async fn fetch_events(feed_url: &str, cache: &CacheConfig, verbose: bool) -> Result<Vec<Event>> {
    let cache_path = super::cache::get_cache_path();

    if cache.enabled {
        if let Some(entry) = read_cached_feed(&cache_path) {
            if is_cache_fresh(&entry, cache.ttl) {
                if verbose {
                    eprintln!("USGS feed: using fresh cache");
                }
                return parse_feed(&entry.body);
            }
        }
    }

    match fetch_feed_body(feed_url).await {
        Ok(body) => {
            let events = parse_feed(&body)?;
            if cache.enabled {
                if let Err(e) = write_cached_feed(&cache_path, &body) {
                    eprintln!("Warning: failed to cache USGS feed: {}", e);
                }
            }
            Ok(events)
        }
        Err(fetch_err) => {
            if cache.enabled {
                if let Some(entry) = read_cached_feed(&cache_path) {
                    eprintln!("USGS fetch failed ({}), falling back to cached feed", fetch_err);
                    return parse_feed(&entry.body);
                }
            }
            Err(fetch_err)
        }
    }
}
