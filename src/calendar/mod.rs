mod feasts;

pub use feasts::{FeastSignificance, FIRST_YEAR, LAST_YEAR};

use chrono::NaiveDate;

/// One feast occurrence from the reference calendar. Immutable once built;
/// correlations carry a snapshot of it.
#[derive(Debug, Clone, PartialEq)]
pub struct HebrewFeast {
    pub name: String,
    pub hebrew_name: String,
    pub date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub significance: FeastSignificance,
    pub biblical_reference: String,
    pub prophetic_importance: String,
}

/// Signed day-distance between an event and the nearest feast occurrence.
///
/// `days_away` is `feast.date - event date` in whole days: positive means
/// the event falls before the feast, negative after it.
#[derive(Debug, Clone)]
pub struct FeastProximity {
    pub feast: HebrewFeast,
    pub days_away: i64,
    pub is_exact_match: bool,
    pub is_within_tolerance: bool,
}

/// Feast occurrences over a year range, with proximity lookup.
#[derive(Debug, Clone)]
pub struct FeastCalendar {
    occurrences: Vec<HebrewFeast>,
}

impl FeastCalendar {
    /// Build the calendar for an inclusive year range. Years outside the
    /// reference table contribute no occurrences.
    pub fn for_years(start_year: i32, end_year: i32) -> Self {
        let mut occurrences = Vec::new();

        for def in feasts::FEASTS {
            for (year, month, day) in def.dates {
                if *year < start_year || *year > end_year {
                    continue;
                }
                // Table dates are validated by tests; an invalid entry is a
                // table bug, skip rather than panic at runtime.
                let Some(date) = NaiveDate::from_ymd_opt(*year, *month, *day) else {
                    continue;
                };
                let end_date = if def.duration_days > 1 {
                    date.checked_add_days(chrono::Days::new(u64::from(def.duration_days) - 1))
                } else {
                    None
                };
                occurrences.push(HebrewFeast {
                    name: def.name.to_string(),
                    hebrew_name: def.hebrew_name.to_string(),
                    date,
                    end_date,
                    significance: def.significance,
                    biblical_reference: def.biblical_reference.to_string(),
                    prophetic_importance: def.prophetic_importance.to_string(),
                });
            }
        }

        occurrences.sort_by_key(|f| f.date);
        FeastCalendar { occurrences }
    }

    /// Calendar over the full reference table.
    pub fn all() -> Self {
        Self::for_years(FIRST_YEAR, LAST_YEAR)
    }

    pub fn occurrences(&self) -> &[HebrewFeast] {
        &self.occurrences
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Find the feast occurrence nearest to `date`, or `None` when no
    /// occurrence lies within `tolerance_days`. Equidistant occurrences
    /// resolve to the earlier one.
    pub fn nearest_feast(&self, date: NaiveDate, tolerance_days: i64) -> Option<FeastProximity> {
        let nearest = self
            .occurrences
            .iter()
            .min_by_key(|feast| (feast.date - date).num_days().abs())?;

        let days_away = (nearest.date - date).num_days();
        if days_away.abs() > tolerance_days {
            return None;
        }

        Some(FeastProximity {
            feast: nearest.clone(),
            days_away,
            is_exact_match: days_away == 0,
            is_within_tolerance: true,
        })
    }
}
