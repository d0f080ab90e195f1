//! Deterministic offline event set, used by `--mock` runs and demos.
//! No randomness: two calls always produce the same events.

use chrono::{TimeZone, Utc};

use super::types::{
    CelestialEvent, CelestialKind, Event, EventSignificance, TerrestrialEvent, TerrestrialKind,
};

fn celestial(
    id: &str,
    (y, m, d): (i32, u32, u32),
    kind: CelestialKind,
    description: &str,
    significance: Option<EventSignificance>,
) -> Event {
    Event::Celestial(CelestialEvent {
        id: id.to_string(),
        date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        kind,
        description: Some(description.to_string()),
        visibility: None,
        significance,
    })
}

fn terrestrial(
    id: &str,
    (y, m, d): (i32, u32, u32),
    kind: TerrestrialKind,
    location: &str,
    magnitude: Option<f64>,
    significance: Option<EventSignificance>,
) -> Event {
    Event::Terrestrial(TerrestrialEvent {
        id: id.to_string(),
        date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
        kind,
        location: Some(location.to_string()),
        magnitude,
        significance,
    })
}

/// Fixed celestial events for 2024-2026, dated to the published eclipse
/// and conjunction calendars.
pub fn mock_celestial_events() -> Vec<Event> {
    vec![
        celestial(
            "se-2024-04-08",
            (2024, 4, 8),
            CelestialKind::SolarEclipse,
            "Total solar eclipse across North America",
            Some(EventSignificance::Critical),
        ),
        celestial(
            "le-2024-09-18",
            (2024, 9, 18),
            CelestialKind::LunarEclipse,
            "Partial lunar eclipse",
            Some(EventSignificance::Medium),
        ),
        celestial(
            "bm-2025-03-14",
            (2025, 3, 14),
            CelestialKind::BloodMoon,
            "Total lunar eclipse visible from the Americas",
            Some(EventSignificance::High),
        ),
        celestial(
            "bm-2025-09-07",
            (2025, 9, 7),
            CelestialKind::BloodMoon,
            "Total lunar eclipse visible from Asia and Australia",
            Some(EventSignificance::High),
        ),
        celestial(
            "cj-2025-08-12",
            (2025, 8, 12),
            CelestialKind::Conjunction,
            "Venus-Jupiter conjunction",
            None,
        ),
        celestial(
            "bm-2026-03-03",
            (2026, 3, 3),
            CelestialKind::BloodMoon,
            "Total lunar eclipse",
            Some(EventSignificance::High),
        ),
        celestial(
            "se-2026-08-12",
            (2026, 8, 12),
            CelestialKind::SolarEclipse,
            "Total solar eclipse over Greenland, Iceland and Spain",
            Some(EventSignificance::High),
        ),
    ]
}

/// Fixed terrestrial events. Representative, not a live feed.
pub fn mock_terrestrial_events() -> Vec<Event> {
    vec![
        terrestrial(
            "eq-2024-10-12",
            (2024, 10, 12),
            TerrestrialKind::Earthquake,
            "Eastern Mediterranean",
            Some(7.0),
            Some(EventSignificance::High),
        ),
        terrestrial(
            "vo-2025-10-08",
            (2025, 10, 8),
            TerrestrialKind::Volcanic,
            "Campi Flegrei",
            Some(3.0),
            Some(EventSignificance::Medium),
        ),
        terrestrial(
            "eq-2025-06-20",
            (2025, 6, 20),
            TerrestrialKind::Earthquake,
            "Pacific Ring of Fire",
            Some(6.2),
            None,
        ),
        terrestrial(
            "st-2026-09-12",
            (2026, 9, 12),
            TerrestrialKind::Storm,
            "Gulf of Mexico",
            None,
            Some(EventSignificance::Medium),
        ),
    ]
}

/// All mock events, celestial first.
pub fn mock_events() -> Vec<Event> {
    let mut events = mock_celestial_events();
    events.extend(mock_terrestrial_events());
    events
}
