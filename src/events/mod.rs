pub mod mock;
pub mod types;

pub use types::{
    CelestialEvent, CelestialKind, Event, EventSignificance, TerrestrialEvent, TerrestrialKind,
};
