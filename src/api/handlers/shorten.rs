//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortenedURL": "http://127.0.0.1:8081/GATC4J1rfF0" }
/// ```
///
/// Re-submitting an already registered URL returns the same short URL with
/// 200 OK.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed, or if the
/// derived code already maps to a different URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let (link, already_existed) = state.link_service.register(payload.url).await?;

    if already_existed {
        tracing::debug!(code = %link.code, "existing mapping reused");
    } else {
        tracing::info!(code = %link.code, url = %link.long_url, "registered new mapping");
    }

    let shortened_url = state.link_service.short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse { shortened_url }))
}
