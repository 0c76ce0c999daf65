//! In-memory implementation of link repository.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::entities::{InsertOutcome, NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreKind};
use crate::error::AppError;
use crate::infrastructure::persistence::link_table::LinkTable;

/// Volatile repository guarded by a single lock. Contents are lost on exit.
#[derive(Default)]
pub struct MemoryLinkRepository {
    table: Mutex<LinkTable>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.table.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.lock().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    fn kind(&self) -> StoreKind {
        StoreKind::Memory
    }

    async fn find_by_id(
        &self,
        id: &str,
        owner_id: Option<String>,
    ) -> Result<Option<ShortLink>, AppError> {
        Ok(self.table.lock().await.get(id, owner_id.as_deref()))
    }

    async fn insert(&self, link: NewShortLink) -> Result<InsertOutcome, AppError> {
        Ok(self.table.lock().await.insert(link))
    }

    async fn insert_batch(
        &self,
        links: Vec<NewShortLink>,
    ) -> Result<Vec<InsertOutcome>, AppError> {
        Ok(self.table.lock().await.insert_batch(links))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), AppError> {
        Ok(())
    }
}
