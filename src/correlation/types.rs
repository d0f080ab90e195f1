use crate::calendar::HebrewFeast;
use crate::events::Event;

/// Significance tier of a correlation, derived from its score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationSignificance {
    Critical,
    High,
    Medium,
    Low,
}

impl CorrelationSignificance {
    /// Threshold classification. Lower bounds are inclusive: exactly 85 is
    /// `Critical`, exactly 70 is `High`, exactly 50 is `Medium`.
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            CorrelationSignificance::Critical
        } else if score >= 70 {
            CorrelationSignificance::High
        } else if score >= 50 {
            CorrelationSignificance::Medium
        } else {
            CorrelationSignificance::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorrelationSignificance::Critical => "critical",
            CorrelationSignificance::High => "high",
            CorrelationSignificance::Medium => "medium",
            CorrelationSignificance::Low => "low",
        }
    }
}

/// One scored event-feast correlation.
///
/// Borrows its event: a correlation never owns the event's lifecycle. The
/// feast is a snapshot cloned out of the calendar.
#[derive(Debug, Clone)]
pub struct FeastCorrelation<'a> {
    pub event: &'a Event,
    pub feast: HebrewFeast,
    /// Sum of three bounded sub-scores, always in 0..=100.
    pub score: u8,
    pub significance: CorrelationSignificance,
    /// Signed: positive = event before the feast, negative = after.
    pub proximity_days: i64,
    /// Human-readable explanation lines, in presentation order.
    pub reasoning: Vec<String>,
}
