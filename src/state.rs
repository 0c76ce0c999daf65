use std::sync::Arc;

use crate::application::services::{LinkService, OwnerService};
use crate::domain::repositories::LinkRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub owner_service: Arc<OwnerService>,
    /// Prefix of every returned short URL, without a trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        owner_service: OwnerService,
        base_url: &str,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
            owner_service: Arc::new(owner_service),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Full short URL for `id`.
    pub fn short_url(&self, id: &str) -> String {
        self.link_service.short_url(&self.base_url, id)
    }
}
