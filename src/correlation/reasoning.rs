use crate::calendar::FeastProximity;
use crate::events::Event;

use super::types::CorrelationSignificance;

/// Extra reasoning lines keyed by `(event type tag, feast name)`.
///
/// This is display text only; it never feeds back into the score. Kept as
/// a table so new pairings are one-line additions. The wording of existing
/// entries is frozen for display compatibility.
const BONUS_NOTES: &[(&str, &str, &str)] = &[
    (
        "blood_moon",
        "Passover",
        "A blood moon on Passover recalls Joel 2:31: the moon turned to blood before the great and terrible day of the LORD",
    ),
    (
        "lunar_eclipse",
        "Passover",
        "A lunar eclipse on Passover matches the opening sign of the 2014-2015 tetrad",
    ),
    (
        "blood_moon",
        "Feast of Tabernacles",
        "A blood moon on Tabernacles completes the tetrad pattern of 2014-2015",
    ),
    (
        "solar_eclipse",
        "Feast of Trumpets",
        "A solar eclipse at the new moon of Trumpets recalls Amos 8:9: the sun goes down at noon",
    ),
    (
        "earthquake",
        "Day of Atonement",
        "An earthquake on the Day of Atonement recalls the shaking of Zechariah 14:4-5",
    ),
];

fn bonus_notes<'a>(
    type_tag: &'a str,
    feast_name: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    BONUS_NOTES
        .iter()
        .filter(move |(tag, feast, _)| *tag == type_tag && *feast == feast_name)
        .map(|(_, _, note)| *note)
}

fn tier_banner(significance: CorrelationSignificance) -> Option<&'static str> {
    match significance {
        CorrelationSignificance::Critical => {
            Some("CRITICAL correlation: this convergence warrants immediate watchfulness")
        }
        CorrelationSignificance::High => {
            Some("HIGH correlation: this convergence deserves close attention")
        }
        CorrelationSignificance::Medium => {
            Some("MEDIUM correlation: this convergence is worth monitoring")
        }
        CorrelationSignificance::Low => None,
    }
}

/// Build the ordered reasoning lines for a correlation: proximity, feast
/// significance, the verbatim citation and rationale, any bonus notes for
/// the `(event type, feast)` pair, and a tier banner when the score
/// reaches 50.
pub(crate) fn build_reasoning(
    event: &Event,
    proximity: &FeastProximity,
    score: u8,
) -> Vec<String> {
    let feast = &proximity.feast;
    let mut lines = Vec::new();

    if proximity.is_exact_match {
        lines.push(format!("occurs exactly on {}", feast.name));
    } else {
        let days = proximity.days_away.abs();
        let unit = if days == 1 { "day" } else { "days" };
        let direction = if proximity.days_away > 0 { "before" } else { "after" };
        lines.push(format!("occurs {} {} {} {}", days, unit, direction, feast.name));
    }

    lines.push(format!(
        "{} is a {}-significance feast",
        feast.name,
        feast.significance.label()
    ));
    lines.push(feast.biblical_reference.clone());
    lines.push(feast.prophetic_importance.clone());

    for note in bonus_notes(event.type_tag(), &feast.name) {
        lines.push(note.to_string());
    }

    if let Some(banner) = tier_banner(CorrelationSignificance::from_score(score)) {
        lines.push(banner.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{FeastSignificance, HebrewFeast};
    use crate::events::{CelestialEvent, CelestialKind, EventSignificance};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn passover_proximity(days_away: i64) -> FeastProximity {
        FeastProximity {
            feast: HebrewFeast {
                name: "Passover".to_string(),
                hebrew_name: "Pesach".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
                end_date: None,
                significance: FeastSignificance::High,
                biblical_reference: "Leviticus 23:5".to_string(),
                prophetic_importance: "Commemorates deliverance from Egypt".to_string(),
            },
            days_away,
            is_exact_match: days_away == 0,
            is_within_tolerance: true,
        }
    }

    fn blood_moon() -> Event {
        Event::Celestial(CelestialEvent {
            id: "bm".to_string(),
            date: Utc.with_ymd_and_hms(2025, 4, 13, 2, 0, 0).unwrap(),
            kind: CelestialKind::BloodMoon,
            description: None,
            visibility: None,
            significance: Some(EventSignificance::Critical),
        })
    }

    fn conjunction() -> Event {
        Event::Celestial(CelestialEvent {
            id: "cj".to_string(),
            date: Utc.with_ymd_and_hms(2025, 4, 13, 2, 0, 0).unwrap(),
            kind: CelestialKind::Conjunction,
            description: None,
            visibility: None,
            significance: None,
        })
    }

    #[test]
    fn test_exact_match_statement() {
        let lines = build_reasoning(&blood_moon(), &passover_proximity(0), 100);
        assert_eq!(lines[0], "occurs exactly on Passover");
    }

    #[test]
    fn test_proximity_statement_direction_and_plural() {
        let before = build_reasoning(&conjunction(), &passover_proximity(2), 65);
        assert_eq!(before[0], "occurs 2 days before Passover");

        let after = build_reasoning(&conjunction(), &passover_proximity(-1), 75);
        assert_eq!(after[0], "occurs 1 day after Passover");
    }

    #[test]
    fn test_fixed_statement_order() {
        let lines = build_reasoning(&conjunction(), &passover_proximity(1), 75);
        assert_eq!(lines[0], "occurs 1 day before Passover");
        assert_eq!(lines[1], "Passover is a high-significance feast");
        assert_eq!(lines[2], "Leviticus 23:5");
        assert_eq!(lines[3], "Commemorates deliverance from Egypt");
        // Conjunction has no bonus note for Passover; banner comes next.
        assert_eq!(
            lines[4],
            "HIGH correlation: this convergence deserves close attention"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_bonus_note_for_blood_moon_on_passover() {
        let lines = build_reasoning(&blood_moon(), &passover_proximity(0), 100);
        assert!(lines
            .iter()
            .any(|l| l.contains("Joel 2:31")), "missing bonus note: {:?}", lines);
        // Bonus note sits between the rationale and the banner.
        let joel = lines.iter().position(|l| l.contains("Joel 2:31")).unwrap();
        assert_eq!(joel, 4);
        assert!(lines[joel + 1].starts_with("CRITICAL correlation"));
    }

    #[test]
    fn test_banner_wording_per_tier() {
        let critical = build_reasoning(&conjunction(), &passover_proximity(0), 85);
        assert!(critical.last().unwrap().starts_with("CRITICAL"));

        let high = build_reasoning(&conjunction(), &passover_proximity(0), 70);
        assert!(high.last().unwrap().starts_with("HIGH"));

        let medium = build_reasoning(&conjunction(), &passover_proximity(0), 50);
        assert!(medium.last().unwrap().starts_with("MEDIUM"));
    }

    #[test]
    fn test_no_banner_below_fifty() {
        let lines = build_reasoning(&conjunction(), &passover_proximity(3), 49);
        assert!(!lines
            .iter()
            .any(|l| l.contains("correlation:")), "unexpected banner: {:?}", lines);
    }
}
