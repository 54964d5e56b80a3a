//! DTOs for the registry enumeration endpoint.

use serde::Serialize;

/// Response listing every registered long URL.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub urls: Vec<String>,
}
