//! Handler for original URL lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::original::OriginalResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the long URL registered under a short code.
///
/// # Endpoint
///
/// `GET /original/{code}`
///
/// # Response
///
/// ```json
/// { "originalURL": "http://example.com/a" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn original_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<OriginalResponse>, AppError> {
    let link = state.link_service.resolve(&code).await?;

    Ok(Json(OriginalResponse {
        original_url: link.long_url,
    }))
}
