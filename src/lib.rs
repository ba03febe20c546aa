//! Wildfire - hype momentum aggregation server
//!
//! Fetches engagement data for a search term from a social-video platform
//! and a search-interest service, reduces both time series to 14-day and
//! 60-day daily averages, and scores per-channel momentum into a weighted
//! composite hype index served over a JSON API.

pub mod config;
pub mod engine;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use types::*;
