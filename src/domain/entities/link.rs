//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A registered mapping between a short code and a long URL.
///
/// The code is derived deterministically from the normalized long URL, so a
/// `Link` is fully reproducible from its `long_url`. Entries live for the
/// process lifetime; there is no deletion or expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for registering a new mapping.
///
/// The invariant that `code` was derived from `long_url` is upheld by the
/// service layer; the repository stores what it is given.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}
