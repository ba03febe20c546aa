//! Hype analysis orchestration: fetch, aggregate, score, cache.

use crate::engine;
use crate::error::{AppError, Result};
use crate::services::ReportCache;
use crate::sources::{tiktok, TikTokClient, TrendsClient};
use crate::types::{
    DailyViews, EngagementReport, EngagementSample, HypeReport, InterestReport,
};
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Number of videos kept in the top-videos gallery.
const TOP_VIDEO_LIMIT: usize = 8;

/// Number of regions kept in the interest breakdown.
const REGION_LIMIT: usize = 10;

/// Orchestrates source fetches and the scoring engine, caching finished
/// per-source reports so repeat lookups stay off the rate-limited APIs.
pub struct HypeService {
    tiktok: Option<Arc<TikTokClient>>,
    trends: Arc<TrendsClient>,
    default_geo: String,
    timeframe: String,
    engagement_cache: ReportCache<EngagementReport>,
    interest_cache: ReportCache<InterestReport>,
}

impl HypeService {
    /// Create a new hype analysis service.
    pub fn new(
        tiktok: Option<Arc<TikTokClient>>,
        trends: Arc<TrendsClient>,
        default_geo: String,
        timeframe: String,
        cache_ttl: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            tiktok,
            trends,
            default_geo,
            timeframe,
            engagement_cache: ReportCache::new(cache_ttl),
            interest_cache: ReportCache::new(cache_ttl),
        })
    }

    /// Full hype analysis for a term.
    ///
    /// Both sources are fetched concurrently. A source that fails or has
    /// nothing for the term becomes `None` in the report and contributes
    /// zero momentum to the composite; the analysis itself always succeeds.
    pub async fn hype_report(&self, term: &str, geo: Option<&str>) -> HypeReport {
        let geo = geo.unwrap_or(&self.default_geo);

        let (engagement, interest) = tokio::join!(
            self.engagement_report(term),
            self.interest_report(term, Some(geo)),
        );

        let engagement = match engagement {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Engagement data unavailable for '{}': {}", term, e);
                None
            }
        };

        let interest = match interest {
            Ok(report) => Some(report),
            Err(e) => {
                warn!("Search interest unavailable for '{}': {}", term, e);
                None
            }
        };

        let score = engine::composite(
            engagement.as_ref().and_then(|r| r.windows.as_ref()),
            interest.as_ref().and_then(|r| r.windows.as_ref()),
        );

        info!(
            "Hype index for '{}': {:.1} ({})",
            term, score.index, score.label
        );

        HypeReport {
            term: term.to_string(),
            score,
            engagement,
            interest,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Social-engagement analysis for a term, cached per term.
    pub async fn engagement_report(&self, term: &str) -> Result<EngagementReport> {
        let key = term.to_lowercase();
        if let Some(report) = self.engagement_cache.get(&key) {
            return Ok(report);
        }

        let Some(client) = &self.tiktok else {
            return Err(AppError::ExternalApi(
                "TikTok API credentials are not configured".to_string(),
            ));
        };

        let videos = client
            .search_videos(term)
            .await
            .map_err(|e| AppError::ExternalApi(e.to_string()))?;

        if videos.is_empty() {
            return Err(AppError::NotFound(format!("No videos found for '{}'", term)));
        }

        let now = Utc::now();
        let samples = tiktok::engagement_samples(&videos);

        let report = EngagementReport {
            term: term.to_string(),
            totals: tiktok::engagement_totals(&videos),
            windows: engine::engagement_windows(&samples, now),
            daily_views: daily_views(&samples),
            top_videos: tiktok::top_videos(&videos, TOP_VIDEO_LIMIT),
            video_count: videos.len(),
            timestamp: now.timestamp_millis(),
        };

        self.engagement_cache.insert(key, report.clone());
        Ok(report)
    }

    /// Search-interest analysis for a term, cached per term and region.
    pub async fn interest_report(&self, term: &str, geo: Option<&str>) -> Result<InterestReport> {
        let geo = geo.unwrap_or(&self.default_geo);
        let key = format!("{}:{}", term.to_lowercase(), geo);
        if let Some(report) = self.interest_cache.get(&key) {
            return Ok(report);
        }

        let series = self
            .trends
            .interest_over_time(term, &self.timeframe, geo)
            .await
            .map_err(|e| AppError::ExternalApi(e.to_string()))?;

        if series.is_empty() || series.iter().all(|s| s.interest == 0) {
            return Err(AppError::NotFound(format!(
                "No search interest data for '{}'",
                term
            )));
        }

        // Region breakdown only resolves at country scope.
        let regions = if geo.len() <= 2 {
            match self
                .trends
                .interest_by_region(term, &self.timeframe, geo)
                .await
            {
                Ok(mut regions) => {
                    regions.truncate(REGION_LIMIT);
                    regions
                }
                Err(e) => {
                    warn!("Region breakdown failed for '{}': {}", term, e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let mean_interest =
            series.iter().map(|s| s.interest as f64).sum::<f64>() / series.len() as f64;

        let report = InterestReport {
            term: term.to_string(),
            geo: geo.to_string(),
            mean_interest,
            windows: engine::interest_windows(&series, Utc::now().date_naive()),
            series,
            regions,
            timestamp: Utc::now().timestamp_millis(),
        };

        self.interest_cache.insert(key, report.clone());
        Ok(report)
    }

    /// Drop expired entries from the report caches. Returns how many were
    /// removed.
    pub fn purge_expired(&self) -> usize {
        self.engagement_cache.purge_expired() + self.interest_cache.purge_expired()
    }
}

/// Sum views per publication day, ascending by date.
fn daily_views(samples: &[EngagementSample]) -> Vec<DailyViews> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for sample in samples {
        *per_day.entry(sample.timestamp.date_naive()).or_default() += sample.views;
    }

    per_day
        .into_iter()
        .map(|(date, views)| DailyViews { date, views })
        .collect()
}
