//! Hype momentum scoring engine.
//!
//! Pure, synchronous, stateless. Three stages composed linearly: window
//! aggregation reduces a raw time series to 14-day/60-day daily averages
//! per channel, the momentum transform maps each (recent, historical) pair
//! to a bounded 0-200 score, and the composite scorer folds the five
//! channel scores into a single weighted index with a recommendation band.
//!
//! Degenerate inputs (empty series, all-zero counts, zero baselines) map to
//! defined numeric outputs; nothing here panics or performs I/O.

pub mod composite;
pub mod momentum;
pub mod window;

pub use composite::composite;
pub use momentum::momentum;
pub use window::{engagement_windows, interest_windows};

/// Length of the recent window in days.
pub const RECENT_WINDOW_DAYS: i64 = 14;

/// Length of the historical window in days. The historical window includes
/// the recent one: both anchor at the reference instant.
pub const HISTORICAL_WINDOW_DAYS: i64 = 60;

/// Cap on the recent/historical ratio. Recent activity at double the
/// historical rate (or more) scores the maximum 200.
pub const MOMENTUM_RATIO_CAP: f64 = 2.0;
