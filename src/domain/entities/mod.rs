//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A registered short code to URL mapping
//! - [`NewLink`] - Input data for registering a mapping

pub mod link;

pub use link::{Link, NewLink};
