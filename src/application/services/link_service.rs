//! Link registration and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Service owning the registration, resolution, and enumeration policy.
///
/// Codes are derived deterministically from the normalized URL, so
/// registering the same URL twice is an idempotent success rather than a
/// conflict. A code already holding a *different* URL is a collision and
/// is rejected without touching the stored entry.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a URL and returns its mapping.
    ///
    /// The boolean is `true` when the URL was already registered and the
    /// existing mapping was returned unchanged.
    ///
    /// The normalize, derive, and insert sequence leaves the registry
    /// untouched on every failure path. Atomicity of the check-then-insert
    /// itself is the repository's contract, so two concurrent registrations
    /// of the same new URL converge on one entry and one code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or malformed.
    /// Returns [`AppError::Conflict`] if the derived code already maps to a
    /// different URL, reporting both URLs.
    pub async fn register(&self, long_url: String) -> Result<(Link, bool), AppError> {
        let normalized_url = normalize_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let code = generate_code(&normalized_url);

        let outcome = self
            .repository
            .insert_if_absent(NewLink {
                code,
                long_url: normalized_url.clone(),
            })
            .await?;

        match outcome {
            InsertOutcome::Inserted(link) => Ok((link, false)),
            InsertOutcome::Occupied(existing) if existing.long_url == normalized_url => {
                Ok((existing, true))
            }
            InsertOutcome::Occupied(existing) => Err(AppError::conflict(
                "Short code already maps to a different URL",
                json!({
                    "code": existing.code,
                    "requested_url": normalized_url,
                    "stored_url": existing.long_url,
                }),
            )),
        }
    }

    /// Resolves a short code to its registered mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the code.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Returns all registered long URLs. Order is not specified.
    pub async fn list_urls(&self) -> Result<Vec<String>, AppError> {
        let links = self.repository.list().await?;

        Ok(links.into_iter().map(|link| link.long_url).collect())
    }

    /// Returns the number of registered mappings.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL from the public base URL and a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
