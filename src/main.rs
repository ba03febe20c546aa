mod api;
mod config;
mod engine;
mod error;
mod services;
mod sources;
mod types;

use axum::Router;
use config::Config;
use services::HypeService;
use sources::{TikTokClient, TrendsClient};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub hype_service: Arc<HypeService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wildfire=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Wildfire server on {}:{}", config.host, config.port);

    // Create the TikTok client (optional, requires RapidAPI credentials)
    let tiktok_client = match (&config.tiktok_api_key, &config.tiktok_api_host) {
        (Some(key), Some(host)) => {
            info!("TikTok API key found, enabling social engagement data");
            Some(Arc::new(TikTokClient::new(key.clone(), host.clone())))
        }
        _ => {
            warn!("TikTok API key/host not configured - engagement channels will score zero");
            None
        }
    };

    // Create the Google Trends client
    let trends_client = Arc::new(TrendsClient::new(
        config.trends_hl.clone(),
        config.trends_tz,
    ));

    // Create the hype analysis service
    let hype_service = HypeService::new(
        tiktok_client,
        trends_client,
        config.trends_geo.clone(),
        config.trends_timeframe.clone(),
        Duration::from_secs(config.report_cache_ttl_secs),
    );

    // Create application state
    let state = AppState {
        config: config.clone(),
        hype_service: hype_service.clone(),
    };

    // Start periodic cache sweep task
    {
        let hype_service = hype_service.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(600)).await;
                let removed = hype_service.purge_expired();
                if removed > 0 {
                    debug!("Purged {} expired report cache entries", removed);
                }
            }
        });
    }

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Wildfire server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
