use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily search-interest observation on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestSample {
    pub date: NaiveDate,
    pub interest: u8,
}

/// Search interest for one region, on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInterest {
    pub region: String,
    pub interest: u8,
}

/// Search-interest analysis for a term.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestReport {
    /// Term this report is for.
    pub term: String,
    /// Region the series was scoped to.
    pub geo: String,
    /// Mean interest across every observation in the requested period.
    pub mean_interest: f64,
    /// 14-day/60-day daily averages for the interest channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub windows: Option<crate::types::InterestWindows>,
    /// Daily interest observations, ascending by date.
    pub series: Vec<InterestSample>,
    /// Regions with the strongest interest, descending.
    pub regions: Vec<RegionInterest>,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}
