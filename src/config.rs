use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// RapidAPI key for the TikTok feed-search endpoint.
    pub tiktok_api_key: Option<String>,
    /// RapidAPI host serving the TikTok feed-search endpoint.
    pub tiktok_api_host: Option<String>,
    /// Locale sent to Google Trends (e.g. "pt-BR").
    pub trends_hl: String,
    /// Timezone offset in minutes sent to Google Trends.
    pub trends_tz: i32,
    /// Default region for search-interest lookups (e.g. "BR").
    pub trends_geo: String,
    /// Period covered by search-interest lookups (e.g. "today 12-m").
    pub trends_timeframe: String,
    /// How long finished per-term reports stay cached, in seconds.
    pub report_cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        Self {
            host,
            port,
            tiktok_api_key: env::var("TIKTOK_API_KEY").ok(),
            tiktok_api_host: env::var("TIKTOK_API_HOST").ok(),
            trends_hl: env::var("TRENDS_HL").unwrap_or_else(|_| "pt-BR".to_string()),
            trends_tz: env::var("TRENDS_TZ")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(360),
            trends_geo: env::var("TRENDS_GEO").unwrap_or_else(|_| "BR".to_string()),
            trends_timeframe: env::var("TRENDS_TIMEFRAME")
                .unwrap_or_else(|_| "today 12-m".to_string()),
            report_cache_ttl_secs: env::var("REPORT_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86_400), // 24 hours
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
