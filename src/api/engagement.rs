//! Social-engagement API endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::api::{validate_term, ApiResponse};
use crate::error::Result;
use crate::types::EngagementReport;
use crate::AppState;

/// Create the engagement router.
pub fn router() -> Router<AppState> {
    Router::new().route("/:term", get(get_engagement))
}

/// Get the social-engagement breakdown for a term.
async fn get_engagement(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<ApiResponse<EngagementReport>>> {
    let term = validate_term(&term)?;
    let report = state.hype_service.engagement_report(term).await?;

    Ok(Json(ApiResponse::new(report)))
}
