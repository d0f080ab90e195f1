use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{ensure_config_dir, get_config_path};

const DEFAULT_CONFIG: &str = r#"# phobetron configuration
#
# Everything here is optional; omitted settings fall back to built-in
# defaults shown below.

correlation:
  # Maximum |days| between an event and a feast to count as correlated.
  tolerance_days: 3
  # Correlations scoring below this are dropped (0-100).
  min_score: 50

sources:
  usgs:
    enabled: true
    feed_url: "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_month.geojson"
    # How long a fetched feed stays fresh before refetching.
    cache_ttl: "1h"
  # Optional JSON event list merged into every run:
  # events_file: "/path/to/events.json"
"#;

/// Write the default config file. Refuses to overwrite an existing one.
///
/// Returns the path written. The write is atomic so an interrupted run
/// never leaves a half-written config behind.
pub fn write_default_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create config directory at {}", parent.display())
                    })?;
                }
            }
            p
        }
        None => {
            ensure_config_dir()?;
            get_config_path()
        }
    };

    if config_path.exists() {
        anyhow::bail!(
            "Config file already exists at {}. Remove it first to re-init.",
            config_path.display()
        );
    }

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(DEFAULT_CONFIG.as_bytes())
        .context("Failed to write default config")?;
    file.commit().context("Failed to save default config")?;

    Ok(config_path)
}
