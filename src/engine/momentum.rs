//! The per-channel momentum transform.

use crate::engine::MOMENTUM_RATIO_CAP;

/// Momentum score in [0, 200] comparing recent and historical daily
/// averages for one channel.
///
/// 100 means the recent average equals the historical one, 200 means recent
/// is at least double historical, 0 means no recent activity. Any activity
/// appearing from a zero historical baseline counts as maximal momentum,
/// which also keeps the ratio free of division by zero.
///
/// Total over non-negative inputs; never panics or errors.
pub fn momentum(recent_avg: f64, historical_avg: f64) -> f64 {
    if historical_avg == 0.0 {
        return if recent_avg > 0.0 { 200.0 } else { 0.0 };
    }

    let ratio = recent_avg / historical_avg;
    ratio.min(MOMENTUM_RATIO_CAP) * 100.0
}
