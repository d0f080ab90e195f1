use crate::calendar::{FeastCalendar, FeastProximity, FeastSignificance};
use crate::events::{Event, EventSignificance};

use super::reasoning::build_reasoning;
use super::types::{CorrelationSignificance, FeastCorrelation};

/// Feast-significance component, 0..=40.
pub fn feast_component(significance: FeastSignificance) -> u8 {
    match significance {
        FeastSignificance::High => 40,
        FeastSignificance::Medium => 25,
        FeastSignificance::Low => 10,
    }
}

/// Proximity component, 0..=40. A step function over `|days_away|`, not a
/// linear decay: day 0 scores 40, each day out drops a band, 4+ days
/// scores nothing. The only supported fractional control is the caller's
/// tolerance cutoff, applied before this function ever runs.
pub fn proximity_component(days_away: i64) -> u8 {
    match days_away.abs() {
        0 => 40,
        1 => 30,
        2 => 20,
        3 => 10,
        _ => 0,
    }
}

/// Event-significance component, 0..=20. `None` is the one documented
/// default in the scorer: an unrated event counts as `Low` (5 points).
pub fn event_component(significance: Option<EventSignificance>) -> u8 {
    match significance.unwrap_or(EventSignificance::Low) {
        EventSignificance::Critical => 20,
        EventSignificance::High => 15,
        EventSignificance::Medium => 10,
        EventSignificance::Low => 5,
    }
}

/// Composite correlation score: the sum of the three bounded components,
/// always in 0..=100.
pub fn correlation_score(
    proximity: &FeastProximity,
    event_significance: Option<EventSignificance>,
) -> u8 {
    feast_component(proximity.feast.significance)
        + proximity_component(proximity.days_away)
        + event_component(event_significance)
}

/// Correlate one event against the calendar. Returns `None` when no feast
/// occurrence lies within `tolerance_days` of the event's date.
///
/// One entry point for both union members: celestial and terrestrial
/// events share scoring and reasoning, only the bonus-note lookup sees the
/// concrete kind.
pub fn correlate<'a>(
    event: &'a Event,
    calendar: &FeastCalendar,
    tolerance_days: i64,
) -> Option<FeastCorrelation<'a>> {
    let proximity = calendar.nearest_feast(event.date().date_naive(), tolerance_days)?;

    let score = correlation_score(&proximity, event.significance());
    let reasoning = build_reasoning(event, &proximity, score);

    Some(FeastCorrelation {
        event,
        proximity_days: proximity.days_away,
        feast: proximity.feast,
        score,
        significance: CorrelationSignificance::from_score(score),
        reasoning,
    })
}
