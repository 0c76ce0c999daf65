//! Storage backend implementations.
//!
//! # Backends
//!
//! - [`MemoryLinkRepository`] - Volatile map behind a mutex
//! - [`FileLinkRepository`] - The same map, rewritten to a JSON file on every write
//! - [`PgLinkRepository`] - PostgreSQL with a `(url, user_id)` unique constraint
//!
//! Exactly one backend is selected at startup by [`connect`].

mod link_table;

pub mod file_link_repository;
pub mod memory_link_repository;
pub mod pg_link_repository;

pub use file_link_repository::FileLinkRepository;
pub use link_table::LinkRecord;
pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Opens the storage backend selected by configuration.
///
/// Priority:
/// 1. `database_dsn` set - PostgreSQL (migrations are applied)
/// 2. `file_storage_path` set - file-backed store
/// 3. In-memory store
///
/// # Errors
///
/// Returns [`AppError::StoreUnavailable`] if the selected backend cannot be opened.
pub async fn connect(config: &Config) -> Result<Arc<dyn LinkRepository>, AppError> {
    if let Some(dsn) = &config.database_dsn {
        let repository = PgLinkRepository::connect(
            dsn,
            config.db_max_connections,
            Duration::from_secs(config.db_connect_timeout),
        )
        .await?;
        tracing::info!("Storage: PostgreSQL");
        return Ok(Arc::new(repository));
    }

    if let Some(path) = &config.file_storage_path {
        let repository = FileLinkRepository::open(path).await?;
        tracing::info!(path = %path, "Storage: file");
        return Ok(Arc::new(repository));
    }

    tracing::info!("Storage: in-memory");
    Ok(Arc::new(MemoryLinkRepository::new()))
}
