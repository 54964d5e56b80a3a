#![allow(dead_code)]

use std::sync::Arc;

use linkmap::application::services::LinkService;
use linkmap::infrastructure::storage::MemoryLinkRepository;
use linkmap::state::AppState;

pub const TEST_BASE_URL: &str = "http://127.0.0.1:8081";

pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository));

    AppState::new(link_service, TEST_BASE_URL.to_string())
}
