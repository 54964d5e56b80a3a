//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`          - Register a URL, returning its short URL
//! - `GET  /original/{code}`  - Look up the long URL behind a code
//! - `GET  /all`              - List every registered long URL
//! - `GET  /health`           - Health check (public, operational)
//! - `GET  /{code}`           - Short link redirect
//!
//! Static segments win over the `/{code}` capture, so `/all`, `/health`,
//! and `/shorten` can never be shadowed by a short code route.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    health_handler, list_handler, original_handler, redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/original/{code}", get(original_handler))
        .route("/all", get(list_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
