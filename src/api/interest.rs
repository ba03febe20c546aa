//! Search-interest API endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::{validate_term, ApiResponse};
use crate::error::Result;
use crate::types::InterestReport;
use crate::AppState;

/// Query parameters for the interest endpoint.
#[derive(Debug, Deserialize)]
pub struct InterestQuery {
    /// Region override (e.g. "BR", "US"). Empty means worldwide.
    pub geo: Option<String>,
}

/// Create the interest router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:term", get(get_interest))
}

/// Get the search-interest breakdown for a term.
async fn get_interest(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Query(query): Query<InterestQuery>,
) -> Result<Json<ApiResponse<InterestReport>>> {
    let term = validate_term(&term)?;
    let report = state
        .hype_service
        .interest_report(term, query.geo.as_deref())
        .await?;

    Ok(Json(ApiResponse::new(report)))
}
