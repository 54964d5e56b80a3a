use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::storage::MemoryLinkRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    /// Public prefix rendered into short URLs, without trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<MemoryLinkRepository>>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
