//! PostgreSQL implementation of link repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::entities::{InsertOutcome, NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreKind};
use crate::error::AppError;
use crate::utils::db_error::{UniqueViolation, unique_violation};

/// Maximum rows written per batch transaction.
pub const BATCH_CHUNK_SIZE: usize = 1000;

const INSERT_LINK: &str = "INSERT INTO shorteners (id, url, user_id) VALUES ($1, $2, $3)";

const INSERT_LINK_OR_SKIP: &str = r#"
    INSERT INTO shorteners (id, url, user_id)
    VALUES ($1, $2, $3)
    ON CONFLICT (url, user_id) DO NOTHING
    RETURNING id
"#;

const SELECT_ID_BY_URL: &str = "SELECT id FROM shorteners WHERE url = $1 AND user_id = $2 LIMIT 1";

/// PostgreSQL repository for link storage and retrieval.
///
/// "No owner" is stored as the empty string so that the `(url, user_id)`
/// unique constraint also covers single-tenant links.
///
/// Statements go through SQLx's per-connection prepared statement cache.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects to `dsn` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the connection or a
    /// migration fails.
    pub async fn connect(
        dsn: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(dsn)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.migrate().await?;

        Ok(repository)
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "migration failed");
                AppError::store_unavailable(
                    "Failed to apply migrations",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        tracing::info!("Database migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    async fn find_id_by_url(&self, url: &str, owner_key: &str) -> Result<Option<String>, AppError> {
        let id = sqlx::query_scalar::<_, String>(SELECT_ID_BY_URL)
            .bind(url)
            .bind(owner_key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    /// Writes one chunk inside its own transaction.
    async fn insert_chunk(&self, links: &[NewShortLink]) -> Result<Vec<InsertOutcome>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut outcomes = Vec::with_capacity(links.len());

        for link in links {
            let owner_key = owner_key_of(&link.owner_id);

            let inserted = sqlx::query_scalar::<_, String>(INSERT_LINK_OR_SKIP)
                .bind(&link.id)
                .bind(&link.original_url)
                .bind(owner_key)
                .fetch_optional(&mut *tx)
                .await?;

            if inserted.is_some() {
                outcomes.push(InsertOutcome::Inserted);
                continue;
            }

            let existing_id = sqlx::query_scalar::<_, String>(SELECT_ID_BY_URL)
                .bind(&link.original_url)
                .bind(owner_key)
                .fetch_one(&mut *tx)
                .await?;

            outcomes.push(InsertOutcome::Conflict { existing_id });
        }

        tx.commit().await?;

        Ok(outcomes)
    }
}

fn owner_key_of(owner_id: &Option<String>) -> &str {
    owner_id.as_deref().unwrap_or("")
}

fn owner_from_key(user_id: String) -> Option<String> {
    if user_id.is_empty() {
        None
    } else {
        Some(user_id)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    fn kind(&self) -> StoreKind {
        StoreKind::Postgres
    }

    async fn find_by_id(
        &self,
        id: &str,
        owner_id: Option<String>,
    ) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, (String, String, String)>(
            r#"
            SELECT id, url, user_id
            FROM shorteners
            WHERE id = $1 AND ($2::text IS NULL OR user_id = $2)
            LIMIT 1
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(id, url, user_id)| ShortLink::new(id, url, owner_from_key(user_id))))
    }

    async fn insert(&self, link: NewShortLink) -> Result<InsertOutcome, AppError> {
        let owner_key = owner_key_of(&link.owner_id);

        let result = sqlx::query(INSERT_LINK)
            .bind(&link.id)
            .bind(&link.original_url)
            .bind(owner_key)
            .execute(self.pool.as_ref())
            .await;

        let err = match result {
            Ok(_) => return Ok(InsertOutcome::Inserted),
            Err(err) => err,
        };

        match unique_violation(&err) {
            Some(UniqueViolation::UrlOwner) => {
                let existing_id = self
                    .find_id_by_url(&link.original_url, owner_key)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal(
                            "Conflicting link vanished",
                            json!({ "url": &link.original_url }),
                        )
                    })?;

                Ok(InsertOutcome::Conflict { existing_id })
            }
            Some(UniqueViolation::PrimaryKey) => Ok(InsertOutcome::IdTaken),
            _ => Err(err.into()),
        }
    }

    /// Inserts in chunks of [`BATCH_CHUNK_SIZE`], one transaction per chunk.
    ///
    /// A failing chunk is rolled back; chunks committed before it stay.
    async fn insert_batch(
        &self,
        links: Vec<NewShortLink>,
    ) -> Result<Vec<InsertOutcome>, AppError> {
        let mut outcomes = Vec::with_capacity(links.len());

        for chunk in links.chunks(BATCH_CHUNK_SIZE) {
            outcomes.extend(self.insert_chunk(chunk).await?);
        }

        Ok(outcomes)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), AppError> {
        self.pool.close().await;
        tracing::info!("Database pool closed");
        Ok(())
    }
}
