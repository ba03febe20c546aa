pub mod engagement;
pub mod health;
pub mod hype;
pub mod interest;

use crate::AppState;
use axum::Router;
use serde::Serialize;

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Serialize)]
pub struct ApiMeta {
    pub cached: bool,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta { cached: false },
        }
    }
}

/// Trim a path term and reject blank input.
fn validate_term(term: &str) -> crate::error::Result<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(crate::error::AppError::BadRequest(
            "Search term is empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/hype", hype::router())
        .nest("/api/engagement", engagement::router())
        .nest("/api/interest", interest::router())
}
