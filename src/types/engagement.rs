use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single published video with its engagement counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementSample {
    /// When the video was published.
    pub timestamp: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Summed engagement counters across every fetched video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementTotals {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Summed views for one calendar day, for the views-over-time chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyViews {
    pub date: NaiveDate,
    pub views: u64,
}

/// A video entry for the top-videos gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub description: String,
    pub cover_url: String,
    /// Direct play URL, or a platform watch link built from the video id.
    pub link: String,
    pub views: u64,
    pub likes: u64,
}

/// Social-engagement analysis for a term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementReport {
    /// Term this report is for.
    pub term: String,
    /// Counters summed over every fetched video.
    pub totals: EngagementTotals,
    /// 14-day/60-day daily averages per channel. Absent when no fetched
    /// video carried a usable timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<crate::types::EngagementWindows>,
    /// Views summed per publication day, ascending by date.
    pub daily_views: Vec<DailyViews>,
    /// Most-viewed videos, descending by view count.
    pub top_videos: Vec<VideoSummary>,
    /// Number of videos the platform returned.
    pub video_count: usize,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}
