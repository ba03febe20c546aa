use serde::{Deserialize, Serialize};

/// One measured signal feeding the composite hype index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    SearchInterest,
    Views,
    Likes,
    Comments,
    Shares,
}

impl Channel {
    /// All channels, in weight order.
    pub const ALL: [Channel; 5] = [
        Channel::SearchInterest,
        Channel::Views,
        Channel::Likes,
        Channel::Comments,
        Channel::Shares,
    ];

    /// Fixed weight of this channel in the composite index.
    /// Weights sum to 1.0 across all five channels.
    pub fn weight(&self) -> f64 {
        match self {
            Channel::SearchInterest => 0.30,
            Channel::Views => 0.25,
            Channel::Likes => 0.20,
            Channel::Comments => 0.15,
            Channel::Shares => 0.10,
        }
    }

    /// Get display name for this channel.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::SearchInterest => "Search Interest",
            Channel::Views => "Views",
            Channel::Likes => "Likes",
            Channel::Comments => "Comments",
            Channel::Shares => "Shares",
        }
    }
}

/// Daily-average engagement over the recent and historical windows for one
/// channel.
///
/// Both averages divide a window sum by the full window length (14.0 and
/// 60.0 days). The historical window includes the recent one, so the two
/// averages share samples; the divisor drives the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowAverages {
    /// Window sum divided by 14.0.
    pub recent_avg: f64,
    /// Window sum divided by 60.0.
    pub historical_avg: f64,
}

/// Window averages for the four social-engagement channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementWindows {
    pub views: WindowAverages,
    pub likes: WindowAverages,
    pub comments: WindowAverages,
    pub shares: WindowAverages,
}

/// Window averages for the search-interest channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestWindows {
    pub interest: WindowAverages,
}

/// Per-channel momentum scores, each on the 0-200 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelScores {
    pub search_interest: f64,
    pub views: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
}

impl ChannelScores {
    /// Get the momentum score for a channel.
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::SearchInterest => self.search_interest,
            Channel::Views => self.views,
            Channel::Likes => self.likes,
            Channel::Comments => self.comments,
            Channel::Shares => self.shares,
        }
    }
}

/// Qualitative recommendation band for a composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Viral,
    Rising,
    Stable,
    Cooling,
}

impl Recommendation {
    /// Map a composite index to its band. Inclusive lower bounds, evaluated
    /// top-down, first match wins.
    pub fn from_index(index: f64) -> Self {
        if index >= 150.0 {
            Recommendation::Viral
        } else if index >= 100.0 {
            Recommendation::Rising
        } else if index >= 60.0 {
            Recommendation::Stable
        } else {
            Recommendation::Cooling
        }
    }

    /// Get display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Viral => "Viral / explosive trend",
            Recommendation::Rising => "Rising / growing hype",
            Recommendation::Stable => "Stable / sustained attention",
            Recommendation::Cooling => "Declining interest / cooling off",
        }
    }
}

/// Composite hype score for a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypeScore {
    /// Weighted composite index on the 0-200 scale.
    pub index: f64,
    /// Recommendation band for the index.
    pub recommendation: Recommendation,
    /// Human-readable recommendation label.
    pub label: String,
    /// The five per-channel momentum scores behind the index.
    pub scores: ChannelScores,
}

/// Full hype analysis for a term: composite score plus the per-source
/// breakdowns the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypeReport {
    /// Term this report is for.
    pub term: String,
    /// Composite hype score.
    pub score: HypeScore,
    /// Social-engagement breakdown. Absent when the platform returned no
    /// usable data; its channels then contribute zero momentum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<crate::types::EngagementReport>,
    /// Search-interest breakdown. Absent when the service returned no
    /// usable data; its channel then contributes zero momentum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<crate::types::InterestReport>,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}
