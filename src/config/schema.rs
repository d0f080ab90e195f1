use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::sources::usgs::DEFAULT_FEED_URL;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub correlation: Option<CorrelationConfig>,

    #[serde(default)]
    pub sources: Option<SourcesConfig>,
}

/// Correlation knobs.
///
/// Example YAML:
/// ```yaml
/// correlation:
///   tolerance_days: 3
///   min_score: 50
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorrelationConfig {
    /// Maximum |days| between an event and a feast to correlate at all
    #[serde(default)]
    pub tolerance_days: Option<i64>,

    /// Correlations scoring below this are dropped (0-100)
    #[serde(default)]
    pub min_score: Option<u8>,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            tolerance_days: Some(crate::correlation::DEFAULT_TOLERANCE_DAYS),
            min_score: Some(crate::correlation::DEFAULT_MIN_SCORE),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default)]
    pub usgs: Option<UsgsConfig>,

    /// Optional path to a JSON event list merged into every run
    #[serde(default)]
    pub events_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UsgsConfig {
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub feed_url: Option<String>,

    /// Feed cache freshness window, humantime format (e.g. "1h", "30m")
    #[serde(default)]
    pub cache_ttl: Option<String>,
}

impl Default for UsgsConfig {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            feed_url: Some(DEFAULT_FEED_URL.to_string()),
            cache_ttl: Some("1h".to_string()),
        }
    }
}

impl Config {
    pub fn tolerance_days(&self) -> i64 {
        self.correlation
            .as_ref()
            .and_then(|c| c.tolerance_days)
            .unwrap_or(crate::correlation::DEFAULT_TOLERANCE_DAYS)
    }

    pub fn min_score(&self) -> u8 {
        self.correlation
            .as_ref()
            .and_then(|c| c.min_score)
            .unwrap_or(crate::correlation::DEFAULT_MIN_SCORE)
    }

    pub fn usgs_enabled(&self) -> bool {
        self.sources
            .as_ref()
            .and_then(|s| s.usgs.as_ref())
            .and_then(|u| u.enabled)
            .unwrap_or(true)
    }

    pub fn usgs_feed_url(&self) -> String {
        self.sources
            .as_ref()
            .and_then(|s| s.usgs.as_ref())
            .and_then(|u| u.feed_url.clone())
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
    }

    /// Cache TTL; malformed values are caught by startup validation, so a
    /// parse failure here just falls back to the one-hour default.
    pub fn cache_ttl(&self) -> Duration {
        self.sources
            .as_ref()
            .and_then(|s| s.usgs.as_ref())
            .and_then(|u| u.cache_ttl.as_deref())
            .and_then(|s| humantime::parse_duration(s).ok())
            .unwrap_or(Duration::from_secs(3600))
    }

    pub fn events_file(&self) -> Option<&str> {
        self.sources
            .as_ref()
            .and_then(|s| s.events_file.as_deref())
    }
}
