//! Registry storage trait definitions for the domain layer.
//!
//! Traits define the contract for registry storage operations, implemented
//! by concrete stores in `crate::infrastructure::storage`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod link_repository;

pub use link_repository::{InsertOutcome, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
