pub mod aggregate;
mod reasoning;
pub mod scorer;
pub mod types;

pub use aggregate::{
    correlate_events, correlation_stats, group_by_feast, most_significant, CorrelationStats,
    DEFAULT_MIN_SCORE, DEFAULT_TOLERANCE_DAYS,
};
pub use scorer::{correlate, correlation_score};
pub use types::{CorrelationSignificance, FeastCorrelation};
