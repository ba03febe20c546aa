//! Window aggregation: raw time series to per-channel daily averages.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::engine::{HISTORICAL_WINDOW_DAYS, RECENT_WINDOW_DAYS};
use crate::types::{
    EngagementSample, EngagementWindows, InterestSample, InterestWindows, WindowAverages,
};

/// Running sums for the four engagement channels.
#[derive(Default)]
struct ChannelSums {
    views: u64,
    likes: u64,
    comments: u64,
    shares: u64,
}

impl ChannelSums {
    fn add(&mut self, sample: &EngagementSample) {
        self.views += sample.views;
        self.likes += sample.likes;
        self.comments += sample.comments;
        self.shares += sample.shares;
    }
}

/// Divide window sums by the fixed window lengths.
///
/// The divisor is always the full window length, no matter how many samples
/// fell in range: the result is a daily rate, not a mean over observed
/// samples. A single large sample on day one of the historical window is
/// still divided by 60.0.
fn daily_averages(recent_sum: u64, historical_sum: u64) -> WindowAverages {
    WindowAverages {
        recent_avg: recent_sum as f64 / RECENT_WINDOW_DAYS as f64,
        historical_avg: historical_sum as f64 / HISTORICAL_WINDOW_DAYS as f64,
    }
}

/// Reduce engagement samples to per-channel daily averages anchored at
/// `now`.
///
/// Samples with `timestamp >= now - 60 days` feed the historical sums, and
/// the subset with `timestamp >= now - 14 days` also feeds the recent sums.
/// The recent set is a subset of the historical set, not a disjoint bucket.
///
/// Returns `None` for an empty series so callers can tell "no data" apart
/// from "measured zero"; a non-empty series whose samples all fall outside
/// the windows yields zero-valued averages.
pub fn engagement_windows(
    samples: &[EngagementSample],
    now: DateTime<Utc>,
) -> Option<EngagementWindows> {
    if samples.is_empty() {
        return None;
    }

    let recent_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let historical_start = now - Duration::days(HISTORICAL_WINDOW_DAYS);

    let mut recent = ChannelSums::default();
    let mut historical = ChannelSums::default();

    for sample in samples {
        if sample.timestamp >= historical_start {
            historical.add(sample);
        }
        if sample.timestamp >= recent_start {
            recent.add(sample);
        }
    }

    Some(EngagementWindows {
        views: daily_averages(recent.views, historical.views),
        likes: daily_averages(recent.likes, historical.likes),
        comments: daily_averages(recent.comments, historical.comments),
        shares: daily_averages(recent.shares, historical.shares),
    })
}

/// Reduce daily search-interest observations to window averages anchored at
/// `today`.
///
/// Uses the same literal sum-then-divide procedure as the engagement
/// channels. With one observation per day the result tracks a mean over the
/// window, but a series with gaps contributes proportionally less: the sums
/// are always divided by the full 14.0 and 60.0 day constants.
pub fn interest_windows(samples: &[InterestSample], today: NaiveDate) -> Option<InterestWindows> {
    if samples.is_empty() {
        return None;
    }

    let recent_start = today - Duration::days(RECENT_WINDOW_DAYS);
    let historical_start = today - Duration::days(HISTORICAL_WINDOW_DAYS);

    let mut recent_sum = 0u64;
    let mut historical_sum = 0u64;

    for sample in samples {
        if sample.date >= historical_start {
            historical_sum += sample.interest as u64;
        }
        if sample.date >= recent_start {
            recent_sum += sample.interest as u64;
        }
    }

    Some(InterestWindows {
        interest: daily_averages(recent_sum, historical_sum),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn sample(days_ago: i64, views: u64, likes: u64, comments: u64, shares: u64) -> EngagementSample {
        EngagementSample {
            timestamp: reference_now() - Duration::days(days_ago),
            views,
            likes,
            comments,
            shares,
        }
    }

    fn interest(days_ago: i64, value: u8) -> InterestSample {
        InterestSample {
            date: reference_now().date_naive() - Duration::days(days_ago),
            interest: value,
        }
    }

    #[test]
    fn test_empty_engagement_series_is_no_data() {
        assert!(engagement_windows(&[], reference_now()).is_none());
    }

    #[test]
    fn test_recent_sample_counts_in_both_windows() {
        let samples = vec![sample(3, 1400, 140, 14, 7)];
        let windows = engagement_windows(&samples, reference_now()).unwrap();

        assert_eq!(windows.views.recent_avg, 100.0);
        assert!((windows.views.historical_avg - 1400.0 / 60.0).abs() < 1e-9);
        assert_eq!(windows.likes.recent_avg, 10.0);
        assert_eq!(windows.comments.recent_avg, 1.0);
        assert_eq!(windows.shares.recent_avg, 0.5);
    }

    #[test]
    fn test_older_sample_counts_only_in_historical_window() {
        let samples = vec![sample(30, 600, 60, 6, 3)];
        let windows = engagement_windows(&samples, reference_now()).unwrap();

        assert_eq!(windows.views.recent_avg, 0.0);
        assert_eq!(windows.views.historical_avg, 10.0);
        assert_eq!(windows.likes.historical_avg, 1.0);
    }

    #[test]
    fn test_sample_outside_both_windows_is_measured_zero() {
        // Non-empty series, nothing in range: zeros, not "no data".
        let samples = vec![sample(90, 9999, 999, 99, 9)];
        let windows = engagement_windows(&samples, reference_now()).unwrap();

        assert_eq!(windows.views.recent_avg, 0.0);
        assert_eq!(windows.views.historical_avg, 0.0);
    }

    #[test]
    fn test_divisors_are_fixed_window_lengths() {
        // Two samples in the recent window, one older. The divisor stays
        // 14.0/60.0 regardless of sample counts.
        let samples = vec![
            sample(1, 700, 0, 0, 0),
            sample(10, 700, 0, 0, 0),
            sample(40, 600, 0, 0, 0),
        ];
        let windows = engagement_windows(&samples, reference_now()).unwrap();

        assert_eq!(windows.views.recent_avg, 1400.0 / 14.0);
        assert!((windows.views.historical_avg - 2000.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let samples = vec![sample(14, 140, 0, 0, 0), sample(60, 600, 0, 0, 0)];
        let windows = engagement_windows(&samples, reference_now()).unwrap();

        // Both samples sit exactly on their window edges and are included.
        assert_eq!(windows.views.recent_avg, 10.0);
        assert!((windows.views.historical_avg - 740.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_interest_series_is_no_data() {
        assert!(interest_windows(&[], reference_now().date_naive()).is_none());
    }

    #[test]
    fn test_interest_uses_literal_divisors() {
        // Seven observations of 60 inside the recent window: the sum is
        // divided by 14.0 and 60.0, not by the observation count.
        let samples: Vec<InterestSample> = (0..7).map(|d| interest(d, 60)).collect();
        let windows = interest_windows(&samples, reference_now().date_naive()).unwrap();

        assert_eq!(windows.interest.recent_avg, 420.0 / 14.0);
        assert_eq!(windows.interest.historical_avg, 420.0 / 60.0);
    }

    #[test]
    fn test_interest_gap_lowers_the_rate() {
        let dense: Vec<InterestSample> = (0..14).map(|d| interest(d, 50)).collect();
        let sparse: Vec<InterestSample> = (0..14).step_by(2).map(|d| interest(d, 50)).collect();

        let today = reference_now().date_naive();
        let dense_avg = interest_windows(&dense, today).unwrap().interest.recent_avg;
        let sparse_avg = interest_windows(&sparse, today).unwrap().interest.recent_avg;

        assert!(sparse_avg < dense_avg);
    }
}
