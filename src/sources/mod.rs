pub mod cache;
pub mod file;
pub mod usgs;
