//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten. A missing scheme is tolerated and
    /// normalized to `http://` before registration.
    #[validate(length(min = 1, message = "URL is required in body"))]
    pub url: String,
}

/// Response containing the rendered short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortenedURL")]
    pub shortened_url: String,
}
