//! Hype score API endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::{validate_term, ApiResponse};
use crate::error::Result;
use crate::types::{HypeReport, HypeScore};
use crate::AppState;

/// Query parameters for hype endpoints.
#[derive(Debug, Deserialize)]
pub struct HypeQuery {
    /// Region override for the search-interest lookup (e.g. "BR", "US").
    pub geo: Option<String>,
}

/// Create the hype router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:term", get(get_hype))
        .route("/:term/score", get(get_score))
}

/// Get the full hype report for a term.
async fn get_hype(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<HypeQuery>,
) -> Result<Json<ApiResponse<HypeReport>>> {
    let term = validate_term(&term)?;
    let report = state
        .hype_service
        .hype_report(term, query.geo.as_deref())
        .await;

    Ok(Json(ApiResponse::new(report)))
}

/// Get just the composite score for a term.
async fn get_score(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<HypeQuery>,
) -> Result<Json<ApiResponse<HypeScore>>> {
    let term = validate_term(&term)?;
    let report = state
        .hype_service
        .hype_report(term, query.geo.as_deref())
        .await;

    Ok(Json(ApiResponse::new(report.score)))
}
