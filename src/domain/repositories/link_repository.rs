//! Repository trait for short link storage.

use std::fmt;

use crate::domain::entities::{InsertOutcome, NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Which storage backend is serving the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    File,
    Postgres,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Memory => "memory",
            StoreKind::File => "file",
            StoreKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage contract for short links.
///
/// Ids are unique across all owners. Duplicate-URL detection is scoped to
/// `(original_url, owner_id)`: inserting a URL the same owner already
/// shortened stores nothing and reports the existing id.
///
/// # Concurrency
///
/// Only the relational backend enforces id uniqueness at write time
/// ([`InsertOutcome::IdTaken`]). The in-memory and file backends trust the
/// caller's prior probe and overwrite on a racing duplicate id.
///
/// # Examples
///
/// See integration tests: `tests/repository_memory.rs`, `tests/repository_file.rs`,
/// `tests/repository_pg.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Backend serving this repository.
    fn kind(&self) -> StoreKind;

    /// Finds a link by its short id.
    ///
    /// With `owner_id` set, only that owner's links are visible; `None`
    /// searches every namespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend errors.
    async fn find_by_id(
        &self,
        id: &str,
        owner_id: Option<String>,
    ) -> Result<Option<ShortLink>, AppError>;

    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend errors.
    async fn insert(&self, link: NewShortLink) -> Result<InsertOutcome, AppError>;

    /// Stores several links in one logical operation.
    ///
    /// Returns one outcome per input link, in input order. Items are only
    /// ever [`InsertOutcome::Inserted`] or [`InsertOutcome::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on backend errors. Backends that
    /// write in chunks keep the chunks committed before the failure.
    async fn insert_batch(&self, links: Vec<NewShortLink>)
    -> Result<Vec<InsertOutcome>, AppError>;

    /// Liveness check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the backend is unreachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Releases underlying resources. Called once at shutdown.
    async fn close(&self) -> Result<(), AppError>;
}
