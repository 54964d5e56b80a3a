//! Handler for registry enumeration.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::list::ListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every registered long URL.
///
/// # Endpoint
///
/// `GET /all`
///
/// # Response
///
/// ```json
/// { "urls": ["http://example.com/a", "http://example.com/b"] }
/// ```
///
/// An empty registry yields 204 No Content instead of an empty list body.
/// Order of the returned URLs is not specified.
pub async fn list_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let urls = state.link_service.list_urls().await?;

    if urls.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(ListResponse { urls }).into_response())
}
