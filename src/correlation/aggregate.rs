use std::cmp::Reverse;
use std::collections::HashMap;

use crate::calendar::FeastCalendar;
use crate::events::Event;

use super::scorer::correlate;
use super::types::{CorrelationSignificance, FeastCorrelation};

/// Default tolerance window, in days, for feast proximity.
pub const DEFAULT_TOLERANCE_DAYS: i64 = 3;
/// Default score floor for keeping a correlation.
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// Correlate a batch of events against the calendar.
///
/// Events with no feast within tolerance and correlations scoring below
/// `min_score` are dropped. The result is sorted by score descending; the
/// sort is stable, so equal scores keep their input order (no secondary
/// key is defined).
pub fn correlate_events<'a>(
    events: &'a [Event],
    calendar: &FeastCalendar,
    tolerance_days: i64,
    min_score: u8,
) -> Vec<FeastCorrelation<'a>> {
    let mut correlations: Vec<FeastCorrelation<'a>> = events
        .iter()
        .filter_map(|event| correlate(event, calendar, tolerance_days))
        .filter(|c| c.score >= min_score)
        .collect();

    correlations.sort_by_key(|c| Reverse(c.score));
    correlations
}

/// Summary statistics over a correlation list.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationStats {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Arithmetic mean of the scores; exactly 0.0 on empty input.
    pub average_score: f64,
    /// Feast name -> number of correlations referencing it.
    pub feast_breakdown: HashMap<String, usize>,
}

pub fn correlation_stats(correlations: &[FeastCorrelation<'_>]) -> CorrelationStats {
    let mut stats = CorrelationStats {
        total: correlations.len(),
        critical: 0,
        high: 0,
        medium: 0,
        low: 0,
        average_score: 0.0,
        feast_breakdown: HashMap::new(),
    };

    for correlation in correlations {
        match correlation.significance {
            CorrelationSignificance::Critical => stats.critical += 1,
            CorrelationSignificance::High => stats.high += 1,
            CorrelationSignificance::Medium => stats.medium += 1,
            CorrelationSignificance::Low => stats.low += 1,
        }
        *stats
            .feast_breakdown
            .entry(correlation.feast.name.clone())
            .or_insert(0) += 1;
    }

    if !correlations.is_empty() {
        let sum: u64 = correlations.iter().map(|c| u64::from(c.score)).sum();
        stats.average_score = sum as f64 / correlations.len() as f64;
    }

    stats
}

/// Group correlations by feast name, preserving each group's relative
/// input order.
pub fn group_by_feast<'a, 'b>(
    correlations: &'b [FeastCorrelation<'a>],
) -> HashMap<String, Vec<&'b FeastCorrelation<'a>>> {
    let mut groups: HashMap<String, Vec<&'b FeastCorrelation<'a>>> = HashMap::new();
    for correlation in correlations {
        groups
            .entry(correlation.feast.name.clone())
            .or_default()
            .push(correlation);
    }
    groups
}

/// The single highest-scoring correlation, first-encountered on ties.
/// `None` on empty input.
pub fn most_significant<'a, 'b>(
    correlations: &'b [FeastCorrelation<'a>],
) -> Option<&'b FeastCorrelation<'a>> {
    let mut best: Option<&'b FeastCorrelation<'a>> = None;
    for correlation in correlations {
        match best {
            Some(current) if correlation.score > current.score => best = Some(correlation),
            None => best = Some(correlation),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{FeastSignificance, HebrewFeast};
    use crate::events::{
        CelestialEvent, CelestialKind, EventSignificance, TerrestrialEvent, TerrestrialKind,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    fn celestial(id: &str, y: i32, m: u32, d: u32, sig: Option<EventSignificance>) -> Event {
        Event::Celestial(CelestialEvent {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            kind: CelestialKind::LunarEclipse,
            description: None,
            visibility: None,
            significance: sig,
        })
    }

    fn terrestrial(id: &str, y: i32, m: u32, d: u32, sig: Option<EventSignificance>) -> Event {
        Event::Terrestrial(TerrestrialEvent {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
            kind: TerrestrialKind::Earthquake,
            location: None,
            magnitude: Some(6.8),
            significance: sig,
        })
    }

    fn made_correlation<'a>(
        event: &'a Event,
        feast_name: &str,
        score: u8,
    ) -> FeastCorrelation<'a> {
        FeastCorrelation {
            event,
            feast: HebrewFeast {
                name: feast_name.to_string(),
                hebrew_name: feast_name.to_string(),
                date: NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
                end_date: None,
                significance: FeastSignificance::High,
                biblical_reference: "Leviticus 23:5".to_string(),
                prophetic_importance: "rationale".to_string(),
            },
            score,
            significance: CorrelationSignificance::from_score(score),
            proximity_days: 0,
            reasoning: vec![],
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let calendar = FeastCalendar::all();
        let correlations = correlate_events(&[], &calendar, 3, 50);
        assert!(correlations.is_empty());

        let stats = correlation_stats(&correlations);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.critical, 0);
        assert_eq!(stats.high, 0);
        assert_eq!(stats.medium, 0);
        assert_eq!(stats.low, 0);
        assert_eq!(stats.average_score, 0.0);
        assert!(stats.feast_breakdown.is_empty());
    }

    #[test]
    fn test_min_score_filter() {
        let calendar = FeastCalendar::all();
        // Purim 2025 is Mar 14, a low feast. One day after it, unrated:
        // 10 + 30 + 5 = 45, under the default floor.
        let events = vec![
            celestial("weak", 2025, 3, 15, None),
            celestial("strong", 2025, 4, 13, Some(EventSignificance::Critical)),
        ];
        let correlations = correlate_events(&events, &calendar, 3, 50);
        assert_eq!(correlations.len(), 1);
        assert_eq!(correlations[0].event.id(), "strong");
        assert!(correlations.iter().all(|c| c.score >= 50));
    }

    #[test]
    fn test_sorted_descending_with_mixed_kinds() {
        let calendar = FeastCalendar::all();
        let events = vec![
            // 1 day before Passover 2025, medium: 40 + 30 + 10 = 80.
            celestial("c1", 2025, 4, 12, Some(EventSignificance::Medium)),
            // Exactly on Yom Kippur 2025, critical: 40 + 40 + 20 = 100.
            terrestrial("t1", 2025, 10, 2, Some(EventSignificance::Critical)),
            // 2 days before Passover, low: 40 + 20 + 5 = 65.
            celestial("c2", 2025, 4, 11, Some(EventSignificance::Low)),
        ];
        let correlations = correlate_events(&events, &calendar, 3, 50);
        let ids: Vec<_> = correlations.iter().map(|c| c.event.id()).collect();
        assert_eq!(ids, vec!["t1", "c1", "c2"]);
        let scores: Vec<_> = correlations.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![100, 80, 65]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let calendar = FeastCalendar::all();
        // Three identical-score events on the same date keep input order.
        let events = vec![
            celestial("first", 2025, 4, 13, Some(EventSignificance::High)),
            celestial("second", 2025, 4, 13, Some(EventSignificance::High)),
            celestial("third", 2025, 4, 13, Some(EventSignificance::High)),
        ];
        let correlations = correlate_events(&events, &calendar, 3, 50);
        let ids: Vec<_> = correlations.iter().map(|c| c.event.id()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_stats_tier_counts_and_average() {
        // Scores 90 (critical) and 60 (medium): average exactly 75.
        let e1 = celestial("a", 2025, 4, 13, None);
        let e2 = celestial("b", 2025, 4, 13, None);
        let correlations = vec![
            made_correlation(&e1, "Passover", 90),
            made_correlation(&e2, "Pentecost", 60),
        ];
        let stats = correlation_stats(&correlations);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.high, 0);
        assert_eq!(stats.medium, 1);
        assert_eq!(stats.low, 0);
        assert_eq!(stats.average_score, 75.0);
        assert_eq!(stats.feast_breakdown.get("Passover"), Some(&1));
        assert_eq!(stats.feast_breakdown.get("Pentecost"), Some(&1));
    }

    #[test]
    fn test_stats_feast_breakdown_counts() {
        let e1 = celestial("a", 2025, 4, 13, None);
        let e2 = celestial("b", 2025, 4, 13, None);
        let e3 = celestial("c", 2025, 4, 13, None);
        let correlations = vec![
            made_correlation(&e1, "Passover", 70),
            made_correlation(&e2, "Passover", 55),
            made_correlation(&e3, "Feast of Trumpets", 85),
        ];
        let stats = correlation_stats(&correlations);
        assert_eq!(stats.feast_breakdown.get("Passover"), Some(&2));
        assert_eq!(stats.feast_breakdown.get("Feast of Trumpets"), Some(&1));
        assert_eq!(stats.feast_breakdown.len(), 2);
    }

    #[test]
    fn test_group_by_feast_preserves_group_order() {
        let e1 = celestial("a", 2025, 4, 13, None);
        let e2 = celestial("b", 2025, 4, 13, None);
        let e3 = celestial("c", 2025, 4, 13, None);
        let correlations = vec![
            made_correlation(&e1, "Passover", 70),
            made_correlation(&e2, "Pentecost", 60),
            made_correlation(&e3, "Passover", 55),
        ];
        let groups = group_by_feast(&correlations);
        let passover = &groups["Passover"];
        assert_eq!(passover.len(), 2);
        assert_eq!(passover[0].event.id(), "a");
        assert_eq!(passover[1].event.id(), "c");
        assert_eq!(groups["Pentecost"].len(), 1);
    }

    #[test]
    fn test_most_significant_empty_and_ties() {
        assert!(most_significant(&[]).is_none());

        let e1 = celestial("a", 2025, 4, 13, None);
        let e2 = celestial("b", 2025, 4, 13, None);
        let e3 = celestial("c", 2025, 4, 13, None);
        let correlations = vec![
            made_correlation(&e1, "Passover", 80),
            made_correlation(&e2, "Pentecost", 80),
            made_correlation(&e3, "Purim", 60),
        ];
        // First-encountered maximum wins the tie.
        let best = most_significant(&correlations).unwrap();
        assert_eq!(best.event.id(), "a");
    }

    #[test]
    fn test_most_significant_unique_maximum() {
        let e1 = celestial("a", 2025, 4, 13, None);
        let e2 = celestial("b", 2025, 4, 13, None);
        let correlations = vec![
            made_correlation(&e1, "Passover", 60),
            made_correlation(&e2, "Pentecost", 95),
        ];
        assert_eq!(most_significant(&correlations).unwrap().event.id(), "b");
    }
}
