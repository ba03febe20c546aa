//! TikTok keyword-feed client (RapidAPI).
//!
//! Fetches the most recent videos matching a search term together with
//! their engagement counters. Requires a RapidAPI key and host.

use crate::types::{EngagementSample, EngagementTotals, VideoSummary};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Number of videos requested per search.
const SEARCH_COUNT: u32 = 20;

/// TikTok feed-search REST client.
#[derive(Clone)]
pub struct TikTokClient {
    client: Client,
    api_key: String,
    host: String,
}

#[derive(Debug, Deserialize)]
struct FeedSearchResponse {
    code: i32,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Option<FeedSearchData>,
}

#[derive(Debug, Deserialize, Default)]
struct FeedSearchData {
    #[serde(default)]
    videos: Vec<RawVideo>,
}

/// A video as returned by the feed-search endpoint. Counters default to
/// zero when the payload omits them; `create_time` stays optional since a
/// video without it cannot feed the momentum windows.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    create_time: Option<i64>,
    #[serde(default)]
    play_count: u64,
    #[serde(default)]
    digg_count: u64,
    #[serde(default)]
    comment_count: u64,
    #[serde(default)]
    share_count: u64,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    cover: String,
    #[serde(default)]
    play: String,
}

impl TikTokClient {
    /// Create a new TikTok client.
    pub fn new(api_key: String, host: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            host,
        }
    }

    /// Search recent videos for a term.
    ///
    /// Returns an empty list when the API answered but found nothing.
    pub async fn search_videos(&self, term: &str) -> anyhow::Result<Vec<RawVideo>> {
        let url = format!("https://{}/feed/search", self.host);

        debug!("Fetching TikTok videos for '{}'", term);

        let count = SEARCH_COUNT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("keywords", term), ("count", count.as_str())])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(
                "TikTok API error: {} - {}",
                status,
                &text[..text.len().min(200)]
            );
            anyhow::bail!("TikTok API error: {}", status);
        }

        let data: FeedSearchResponse = response.json().await?;

        if data.code != 0 {
            anyhow::bail!(
                "TikTok API returned code {}: {}",
                data.code,
                data.msg.unwrap_or_default()
            );
        }

        let videos = data.data.map(|d| d.videos).unwrap_or_default();
        debug!("TikTok returned {} videos for '{}'", videos.len(), term);
        Ok(videos)
    }
}

/// Convert raw videos into engine samples.
///
/// Videos without a usable creation timestamp are excluded; they cannot be
/// placed in a window.
pub fn engagement_samples(videos: &[RawVideo]) -> Vec<EngagementSample> {
    videos
        .iter()
        .filter_map(|video| {
            let timestamp = DateTime::from_timestamp(video.create_time?, 0)?;
            Some(EngagementSample {
                timestamp,
                views: video.play_count,
                likes: video.digg_count,
                comments: video.comment_count,
                shares: video.share_count,
            })
        })
        .collect()
}

/// Sum the engagement counters across every fetched video, including those
/// without a timestamp.
pub fn engagement_totals(videos: &[RawVideo]) -> EngagementTotals {
    videos.iter().fold(EngagementTotals::default(), |mut totals, video| {
        totals.views += video.play_count;
        totals.likes += video.digg_count;
        totals.comments += video.comment_count;
        totals.shares += video.share_count;
        totals
    })
}

/// The most-viewed videos for the gallery, descending by view count.
///
/// The link falls back to a watch URL built from the video id when the
/// payload carries no direct play URL.
pub fn top_videos(videos: &[RawVideo], limit: usize) -> Vec<VideoSummary> {
    let mut sorted: Vec<&RawVideo> = videos.iter().collect();
    sorted.sort_by(|a, b| b.play_count.cmp(&a.play_count));

    sorted
        .into_iter()
        .take(limit)
        .map(|video| {
            let link = if video.play.is_empty() {
                format!(
                    "https://www.tiktok.com/video/{}",
                    video.id.as_deref().unwrap_or_default()
                )
            } else {
                video.play.clone()
            };

            VideoSummary {
                description: video.desc.clone(),
                cover_url: video.cover.clone(),
                link,
                views: video.play_count,
                likes: video.digg_count,
            }
        })
        .collect()
}
