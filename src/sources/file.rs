use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::events::{
    CelestialEvent, CelestialKind, Event, EventSignificance, TerrestrialEvent, TerrestrialKind,
};

/// One event as it appears in a JSON event file. The `type` string decides
/// which side of the union the record lands on; strings outside both kind
/// sets are an error, not a silent default.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EventRecord {
    id: String,
    #[serde(alias = "eventDate")]
    date: DateTime<Utc>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(alias = "propheticSignificance", default)]
    prophetic_significance: Option<EventSignificance>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    visibility: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    magnitude: Option<f64>,
}

fn event_from_record(record: EventRecord) -> Result<Event> {
    if let Some(kind) = CelestialKind::from_tag(&record.kind) {
        return Ok(Event::Celestial(CelestialEvent {
            id: record.id,
            date: record.date,
            kind,
            description: record.description,
            visibility: record.visibility,
            significance: record.prophetic_significance,
        }));
    }
    if let Some(kind) = TerrestrialKind::from_tag(&record.kind) {
        return Ok(Event::Terrestrial(TerrestrialEvent {
            id: record.id,
            date: record.date,
            kind,
            location: record.location,
            magnitude: record.magnitude,
            significance: record.prophetic_significance,
        }));
    }
    bail!("Unknown event type '{}' for event '{}'", record.kind, record.id)
}

/// Load a heterogeneous event list from a JSON file.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    let records: Vec<EventRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events file at {}", path.display()))?;

    records.into_iter().map(event_from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from_json(json: &str) -> EventRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_celestial_record() {
        let record = record_from_json(
            r#"{
                "id": "bm-2025-03-14",
                "date": "2025-03-14T06:58:00Z",
                "type": "blood_moon",
                "propheticSignificance": "high",
                "description": "Total lunar eclipse"
            }"#,
        );
        let event = event_from_record(record).unwrap();
        assert!(event.is_celestial());
        assert_eq!(event.type_tag(), "blood_moon");
        assert_eq!(event.significance(), Some(EventSignificance::High));
    }

    #[test]
    fn test_terrestrial_record_with_event_date_alias() {
        let record = record_from_json(
            r#"{
                "id": "eq-1",
                "eventDate": "2024-10-12T09:30:00Z",
                "type": "earthquake",
                "location": "Eastern Mediterranean",
                "magnitude": 7.0
            }"#,
        );
        let event = event_from_record(record).unwrap();
        assert!(!event.is_celestial());
        // No significance on the wire: stays None until the scorer's default.
        assert_eq!(event.significance(), None);
        match event {
            Event::Terrestrial(e) => assert_eq!(e.magnitude, Some(7.0)),
            Event::Celestial(_) => panic!("expected terrestrial"),
        }
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let record = record_from_json(
            r#"{"id": "x", "date": "2025-01-01T00:00:00Z", "type": "comet"}"#,
        );
        let err = event_from_record(record).unwrap_err();
        assert!(err.to_string().contains("Unknown event type 'comet'"));
    }

    #[test]
    fn test_load_events_from_file() {
        let path = std::env::temp_dir().join("phobetron_test_events.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "a", "date": "2025-04-13T00:00:00Z", "type": "lunar_eclipse", "propheticSignificance": "critical"},
                {"id": "b", "date": "2025-10-02T00:00:00Z", "type": "earthquake", "magnitude": 6.8}
            ]"#,
        )
        .unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id(), "a");
        assert!(events[0].is_celestial());
        assert!(!events[1].is_celestial());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_events_missing_file() {
        let path = std::env::temp_dir().join("phobetron_test_no_such_file.json");
        let _ = std::fs::remove_file(&path);
        assert!(load_events(&path).is_err());
    }
}
