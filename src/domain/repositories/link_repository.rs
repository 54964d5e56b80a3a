//! Repository trait for registry storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an atomic insert attempt.
///
/// `Occupied` carries the entry already stored under the code so the caller
/// can decide between idempotent success and a collision error without a
/// second lookup.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The mapping was stored; no entry existed under this code.
    Inserted(Link),
    /// An entry already exists under this code. The store is unchanged.
    Occupied(Link),
}

/// Storage interface for the code-to-URL registry.
///
/// Implementations must make `insert_if_absent` a single atomic critical
/// section with respect to all other operations: two concurrent inserts for
/// the same code must resolve to one `Inserted` and one `Occupied`, never
/// two entries and never a lost update. Reads may run concurrently with
/// each other.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new mapping unless its code is already taken.
    ///
    /// Never overwrites: if the code is present, the existing entry is
    /// returned untouched as [`InsertOutcome::Occupied`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all stored mappings. Order is not specified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<usize, AppError>;
}
