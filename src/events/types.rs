use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prophetic significance assigned to an event by its source.
///
/// Optional on the wire: sources that don't rate their events leave it out,
/// and the scorer treats the absence as `Low` (an explicit, documented
/// default - see `scorer::event_component`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSignificance {
    Critical,
    High,
    Medium,
    Low,
}

/// Celestial event kinds. This set is closed: it is what decides the
/// celestial/terrestrial split during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelestialKind {
    BloodMoon,
    SolarEclipse,
    LunarEclipse,
    Conjunction,
    Alignment,
}

impl CelestialKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "blood_moon" => Some(CelestialKind::BloodMoon),
            "solar_eclipse" => Some(CelestialKind::SolarEclipse),
            "lunar_eclipse" => Some(CelestialKind::LunarEclipse),
            "conjunction" => Some(CelestialKind::Conjunction),
            "alignment" => Some(CelestialKind::Alignment),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CelestialKind::BloodMoon => "blood_moon",
            CelestialKind::SolarEclipse => "solar_eclipse",
            CelestialKind::LunarEclipse => "lunar_eclipse",
            CelestialKind::Conjunction => "conjunction",
            CelestialKind::Alignment => "alignment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CelestialKind::BloodMoon => "Blood Moon",
            CelestialKind::SolarEclipse => "Solar Eclipse",
            CelestialKind::LunarEclipse => "Lunar Eclipse",
            CelestialKind::Conjunction => "Conjunction",
            CelestialKind::Alignment => "Alignment",
        }
    }
}

/// Terrestrial event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrestrialKind {
    Earthquake,
    Volcanic,
    Storm,
    Flood,
}

impl TerrestrialKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "earthquake" => Some(TerrestrialKind::Earthquake),
            "volcanic" => Some(TerrestrialKind::Volcanic),
            "storm" => Some(TerrestrialKind::Storm),
            "flood" => Some(TerrestrialKind::Flood),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            TerrestrialKind::Earthquake => "earthquake",
            TerrestrialKind::Volcanic => "volcanic",
            TerrestrialKind::Storm => "storm",
            TerrestrialKind::Flood => "flood",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TerrestrialKind::Earthquake => "Earthquake",
            TerrestrialKind::Volcanic => "Volcanic Eruption",
            TerrestrialKind::Storm => "Severe Storm",
            TerrestrialKind::Flood => "Flood",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CelestialEvent {
    pub id: String,
    pub date: DateTime<Utc>,
    pub kind: CelestialKind,
    pub description: Option<String>,
    pub visibility: Option<String>, // e.g. "visible from Jerusalem"
    pub significance: Option<EventSignificance>,
}

#[derive(Debug, Clone)]
pub struct TerrestrialEvent {
    pub id: String,
    pub date: DateTime<Utc>,
    pub kind: TerrestrialKind,
    pub location: Option<String>,
    pub magnitude: Option<f64>, // Richter for earthquakes, VEI for volcanic
    pub significance: Option<EventSignificance>,
}

/// An event under correlation. Tagged union: celestial and terrestrial
/// payloads differ, and the aggregator dispatches on the tag with an
/// exhaustive match rather than probing for fields.
#[derive(Debug, Clone)]
pub enum Event {
    Celestial(CelestialEvent),
    Terrestrial(TerrestrialEvent),
}

impl Event {
    pub fn id(&self) -> &str {
        match self {
            Event::Celestial(e) => &e.id,
            Event::Terrestrial(e) => &e.id,
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Event::Celestial(e) => e.date,
            Event::Terrestrial(e) => e.date,
        }
    }

    pub fn significance(&self) -> Option<EventSignificance> {
        match self {
            Event::Celestial(e) => e.significance,
            Event::Terrestrial(e) => e.significance,
        }
    }

    /// Wire tag of the concrete kind (e.g. "blood_moon", "earthquake").
    /// Also the key used by the bonus-reasoning table.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Event::Celestial(e) => e.kind.tag(),
            Event::Terrestrial(e) => e.kind.tag(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Event::Celestial(e) => e.kind.label(),
            Event::Terrestrial(e) => e.kind.label(),
        }
    }

    pub fn is_celestial(&self) -> bool {
        matches!(self, Event::Celestial(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_celestial_tag_roundtrip() {
        for kind in [
            CelestialKind::BloodMoon,
            CelestialKind::SolarEclipse,
            CelestialKind::LunarEclipse,
            CelestialKind::Conjunction,
            CelestialKind::Alignment,
        ] {
            assert_eq!(CelestialKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_terrestrial_tag_roundtrip() {
        for kind in [
            TerrestrialKind::Earthquake,
            TerrestrialKind::Volcanic,
            TerrestrialKind::Storm,
            TerrestrialKind::Flood,
        ] {
            assert_eq!(TerrestrialKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert_eq!(CelestialKind::from_tag("earthquake"), None);
        assert_eq!(TerrestrialKind::from_tag("blood_moon"), None);
        assert_eq!(CelestialKind::from_tag("comet"), None);
        assert_eq!(TerrestrialKind::from_tag("comet"), None);
    }

    #[test]
    fn test_significance_parses_lowercase() {
        let sig: EventSignificance = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(sig, EventSignificance::Critical);
    }

    #[test]
    fn test_event_accessors() {
        let date = Utc.with_ymd_and_hms(2025, 4, 13, 3, 0, 0).unwrap();
        let event = Event::Celestial(CelestialEvent {
            id: "bm-2025".to_string(),
            date,
            kind: CelestialKind::BloodMoon,
            description: None,
            visibility: None,
            significance: Some(EventSignificance::High),
        });

        assert_eq!(event.id(), "bm-2025");
        assert_eq!(event.date(), date);
        assert_eq!(event.significance(), Some(EventSignificance::High));
        assert_eq!(event.type_tag(), "blood_moon");
        assert!(event.is_celestial());
    }
}
