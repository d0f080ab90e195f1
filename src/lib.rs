pub mod calendar;
pub mod config;
pub mod correlation;
pub mod events;
pub mod fetch;
pub mod output;
pub mod sources;
