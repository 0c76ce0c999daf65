#![allow(dead_code)]

use axum_test::TestServer;
use shorturl::application::services::OwnerService;
use shorturl::domain::repositories::LinkRepository;
use shorturl::infrastructure::persistence::MemoryLinkRepository;
use shorturl::routes::app_router;
use shorturl::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "http://sho.rt";
pub const SECRET: &str = "test-signing-secret";

pub fn create_test_state(repository: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(repository, OwnerService::new(SECRET.to_string()), BASE_URL)
}

/// Test server over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let server = create_server_with(repository.clone());
    (server, repository)
}

pub fn create_server_with(repository: Arc<dyn LinkRepository>) -> TestServer {
    let app = app_router(create_test_state(repository), Duration::from_secs(5));
    TestServer::new(app).unwrap()
}

/// `Cookie` header value for `owner`, signed with [`SECRET`].
pub fn owner_cookie(owner: &str) -> String {
    format!(
        "user_id={}",
        OwnerService::new(SECRET.to_string()).sign(owner)
    )
}

/// Strips [`BASE_URL`] from a returned short URL.
pub fn id_of(short_url: &str) -> &str {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_else(|| panic!("unexpected short URL: {short_url}"))
}
