//! Google Trends client.
//!
//! Talks to the widget API the Trends web UI uses: an explore call hands
//! out per-widget tokens, then each widget endpoint serves the actual data.
//! Every response body is prefixed with an XSSI guard that must be stripped
//! before JSON parsing.

use crate::types::{InterestSample, RegionInterest};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const TRENDS_API_URL: &str = "https://trends.google.com/trends/api";

/// Browser-like user agent; the widget API rejects clientless requests.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Widget id for the interest-over-time series.
const WIDGET_TIMESERIES: &str = "TIMESERIES";

/// Widget id for the interest-by-region map.
const WIDGET_GEO_MAP: &str = "GEO_MAP";

/// Google Trends REST client.
#[derive(Clone)]
pub struct TrendsClient {
    client: Client,
    hl: String,
    tz: i32,
}

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
    #[serde(default)]
    token: Option<String>,
    request: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MultilineResponse {
    default: Timeline,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Timeline {
    #[serde(default)]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelinePoint {
    /// Unix seconds, as a decimal string.
    time: String,
    #[serde(default)]
    value: Vec<u8>,
    #[serde(default)]
    has_data: Vec<bool>,
}

#[derive(Debug, Deserialize)]
struct ComparedGeoResponse {
    default: GeoMap,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeoMap {
    #[serde(default)]
    geo_map_data: Vec<GeoPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeoPoint {
    geo_name: String,
    #[serde(default)]
    value: Vec<u8>,
    #[serde(default)]
    has_data: Vec<bool>,
}

impl TrendsClient {
    /// Create a new Trends client.
    pub fn new(hl: String, tz: i32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, hl, tz }
    }

    /// Daily search interest for a term over the requested timeframe and
    /// region, on the 0-100 scale.
    ///
    /// An empty or all-zero series means the service knows nothing about
    /// the term; callers treat that as "no data", not a measured zero
    /// baseline.
    pub async fn interest_over_time(
        &self,
        term: &str,
        timeframe: &str,
        geo: &str,
    ) -> anyhow::Result<Vec<InterestSample>> {
        let widget = self.explore_widget(term, timeframe, geo, WIDGET_TIMESERIES).await?;
        let body = self.widget_data("multiline", &widget).await?;
        let samples = parse_multiline(&body)?;

        debug!(
            "Trends returned {} interest points for '{}'",
            samples.len(),
            term
        );
        Ok(samples)
    }

    /// Search interest per region for a term, descending.
    pub async fn interest_by_region(
        &self,
        term: &str,
        timeframe: &str,
        geo: &str,
    ) -> anyhow::Result<Vec<RegionInterest>> {
        let mut widget = self.explore_widget(term, timeframe, geo, WIDGET_GEO_MAP).await?;

        // Region-level resolution, low-volume regions included.
        if let Some(request) = widget.request.as_object_mut() {
            request.insert("resolution".to_string(), serde_json::json!("REGION"));
            request.insert(
                "includeLowSearchVolumeGeos".to_string(),
                serde_json::json!(true),
            );
        }

        let body = self.widget_data("comparedgeo", &widget).await?;
        let regions = parse_comparedgeo(&body)?;

        debug!("Trends returned {} regions for '{}'", regions.len(), term);
        Ok(regions)
    }

    /// Run the explore step and pull out one widget by id.
    async fn explore_widget(
        &self,
        term: &str,
        timeframe: &str,
        geo: &str,
        widget_id: &str,
    ) -> anyhow::Result<Widget> {
        let request = serde_json::json!({
            "comparisonItem": [{
                "keyword": term,
                "time": timeframe,
                "geo": geo,
            }],
            "category": 0,
            "property": "",
        });

        let tz = self.tz.to_string();
        let req = request.to_string();
        let response = self
            .client
            .get(format!("{}/explore", TRENDS_API_URL))
            .query(&[
                ("hl", self.hl.as_str()),
                ("tz", tz.as_str()),
                ("req", req.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Trends explore error for '{}': {}", term, status);
            anyhow::bail!("Trends explore error: {}", status);
        }

        let body = response.text().await?;
        let explore: ExploreResponse = serde_json::from_str(strip_xssi_prefix(&body))?;

        // The widget endpoints rate-limit aggressively; give them a beat.
        tokio::time::sleep(Duration::from_secs(1)).await;

        explore
            .widgets
            .into_iter()
            .find(|w| w.id == widget_id && w.token.is_some())
            .ok_or_else(|| anyhow::anyhow!("Trends explore response has no {} widget", widget_id))
    }

    /// Fetch one widget's data with its explore token.
    async fn widget_data(&self, endpoint: &str, widget: &Widget) -> anyhow::Result<String> {
        let token = widget
            .token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Trends widget {} carries no token", widget.id))?;

        let tz = self.tz.to_string();
        let req = widget.request.to_string();
        let response = self
            .client
            .get(format!("{}/widgetdata/{}", TRENDS_API_URL, endpoint))
            .query(&[
                ("hl", self.hl.as_str()),
                ("tz", tz.as_str()),
                ("req", req.as_str()),
                ("token", token),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Trends widgetdata/{} error: {}", endpoint, status);
            anyhow::bail!("Trends widget data error: {}", status);
        }

        Ok(response.text().await?)
    }
}

/// Strip the `)]}'` XSSI guard Google prepends to its JSON bodies.
fn strip_xssi_prefix(body: &str) -> &str {
    match body.find('\n') {
        Some(index) => &body[index + 1..],
        None => body,
    }
}

/// Parse a multiline widget body into daily interest samples.
///
/// Points flagged as having no data, or missing a value, are dropped
/// rather than zero-filled.
fn parse_multiline(body: &str) -> anyhow::Result<Vec<InterestSample>> {
    let response: MultilineResponse = serde_json::from_str(strip_xssi_prefix(body))?;

    let samples = response
        .default
        .timeline_data
        .into_iter()
        .filter_map(|point| {
            if !point.has_data.first().copied().unwrap_or(true) {
                return None;
            }
            let seconds = point.time.parse::<i64>().ok()?;
            let date = DateTime::from_timestamp(seconds, 0)?.date_naive();
            let interest = point.value.first().copied()?;
            Some(InterestSample { date, interest })
        })
        .collect();

    Ok(samples)
}

/// Parse a comparedgeo widget body into regions, descending by interest.
fn parse_comparedgeo(body: &str) -> anyhow::Result<Vec<RegionInterest>> {
    let response: ComparedGeoResponse = serde_json::from_str(strip_xssi_prefix(body))?;

    let mut regions: Vec<RegionInterest> = response
        .default
        .geo_map_data
        .into_iter()
        .filter_map(|point| {
            if !point.has_data.first().copied().unwrap_or(true) {
                return None;
            }
            let interest = point.value.first().copied()?;
            Some(RegionInterest {
                region: point.geo_name,
                interest,
            })
        })
        .collect();

    regions.sort_by(|a, b| b.interest.cmp(&a.interest));
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_xssi_prefix() {
        let body = ")]}'\n{\"widgets\":[]}";
        assert_eq!(strip_xssi_prefix(body), "{\"widgets\":[]}");

        let multiline = ")]}',\n{\"default\":{}}";
        assert_eq!(strip_xssi_prefix(multiline), "{\"default\":{}}");
    }

    #[test]
    fn test_strip_xssi_prefix_without_guard() {
        assert_eq!(strip_xssi_prefix("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_parse_multiline_fixture() {
        let body = ")]}',\n{\"default\":{\"timelineData\":[\
            {\"time\":\"1717200000\",\"formattedTime\":\"Jun 1, 2024\",\"value\":[42],\"hasData\":[true]},\
            {\"time\":\"1717286400\",\"formattedTime\":\"Jun 2, 2024\",\"value\":[58],\"hasData\":[true]},\
            {\"time\":\"1717372800\",\"formattedTime\":\"Jun 3, 2024\",\"value\":[0],\"hasData\":[false]}\
        ]}}";

        let samples = parse_multiline(body).unwrap();

        // The no-data point is dropped, not zero-filled.
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].interest, 42);
        assert_eq!(samples[0].date.to_string(), "2024-06-01");
        assert_eq!(samples[1].interest, 58);
    }

    #[test]
    fn test_parse_multiline_empty_timeline() {
        let body = ")]}',\n{\"default\":{\"timelineData\":[]}}";
        assert!(parse_multiline(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_comparedgeo_sorts_descending() {
        let body = ")]}',\n{\"default\":{\"geoMapData\":[\
            {\"geoName\":\"Sao Paulo\",\"value\":[55],\"hasData\":[true]},\
            {\"geoName\":\"Bahia\",\"value\":[100],\"hasData\":[true]},\
            {\"geoName\":\"Acre\",\"value\":[0],\"hasData\":[false]}\
        ]}}";

        let regions = parse_comparedgeo(body).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].region, "Bahia");
        assert_eq!(regions[0].interest, 100);
        assert_eq!(regions[1].region, "Sao Paulo");
    }
}
