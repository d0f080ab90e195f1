use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref correlation) = config.correlation {
        if let Some(tolerance) = correlation.tolerance_days {
            if !(0..=30).contains(&tolerance) {
                errors.push(format!(
                    "correlation.tolerance_days: must be between 0 and 30, got {}",
                    tolerance
                ));
            }
        }
        if let Some(min_score) = correlation.min_score {
            if min_score > 100 {
                errors.push(format!(
                    "correlation.min_score: must be between 0 and 100, got {}",
                    min_score
                ));
            }
        }
    }

    if let Some(ref sources) = config.sources {
        if let Some(ref usgs) = sources.usgs {
            if let Some(ref url) = usgs.feed_url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    errors.push(format!(
                        "sources.usgs.feed_url: must be an http(s) URL, got '{}'",
                        url
                    ));
                }
            }
            if let Some(ref ttl) = usgs.cache_ttl {
                if let Err(e) = humantime::parse_duration(ttl) {
                    errors.push(format!(
                        "sources.usgs.cache_ttl: invalid duration '{}' - {}",
                        ttl, e
                    ));
                }
            }
        }
        if let Some(ref path) = sources.events_file {
            if path.trim().is_empty() {
                errors.push("sources.events_file: must not be empty".to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
