//! The weighted composite scorer and recommendation banding.

use crate::engine::momentum;
use crate::types::{
    Channel, ChannelScores, EngagementWindows, HypeScore, InterestWindows, Recommendation,
    WindowAverages,
};

fn channel_momentum(windows: Option<&WindowAverages>) -> f64 {
    match windows {
        Some(w) => momentum(w.recent_avg, w.historical_avg),
        None => 0.0,
    }
}

/// Fold per-source window averages into the composite hype score.
///
/// A missing source contributes zero momentum for each of its channels. The
/// weighted sum always runs over all five channels with their fixed
/// weights; weights are never renormalized and no term is omitted, so
/// missing data pulls the index down instead of dropping out of it.
pub fn composite(
    engagement: Option<&EngagementWindows>,
    interest: Option<&InterestWindows>,
) -> HypeScore {
    let scores = ChannelScores {
        search_interest: channel_momentum(interest.map(|w| &w.interest)),
        views: channel_momentum(engagement.map(|w| &w.views)),
        likes: channel_momentum(engagement.map(|w| &w.likes)),
        comments: channel_momentum(engagement.map(|w| &w.comments)),
        shares: channel_momentum(engagement.map(|w| &w.shares)),
    };

    let index: f64 = Channel::ALL
        .iter()
        .map(|channel| scores.get(*channel) * channel.weight())
        .sum();

    let recommendation = Recommendation::from_index(index);

    HypeScore {
        index,
        recommendation,
        label: recommendation.label().to_string(),
        scores,
    }
}
