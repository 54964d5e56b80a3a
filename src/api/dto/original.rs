//! DTOs for the original URL lookup endpoint.

use serde::Serialize;

/// Response carrying the long URL registered under a short code.
#[derive(Debug, Serialize)]
pub struct OriginalResponse {
    #[serde(rename = "originalURL")]
    pub original_url: String,
}
