//! # linkmap
//!
//! A minimal in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry storage
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Deterministic short codes derived from the normalized URL
//! - Idempotent re-registration: shortening the same URL twice returns the same code
//! - Safe concurrent access to the registry from parallel request tasks
//! - Redirection from `/{code}` to the original URL
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: where the server listens and how short URLs are rendered
//! export LISTEN="127.0.0.1:8081"
//! export BASE_URL="http://127.0.0.1:8081"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::storage::MemoryLinkRepository;
    pub use crate::state::AppState;
}
