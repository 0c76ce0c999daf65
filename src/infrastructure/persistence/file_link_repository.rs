//! File-backed implementation of link repository.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::entities::{InsertOutcome, NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, StoreKind};
use crate::error::AppError;
use crate::infrastructure::persistence::link_table::{LinkRecord, LinkTable};

/// Repository that keeps every link in memory and rewrites the whole file
/// after each mutation.
///
/// # File Format
///
/// A JSON array of `{ "uuid", "short_url", "original_url", "user_id"? }`
/// records. The file is never appended to: each insert or batch serializes
/// the full table to a sibling `.tmp` file and renames it over the target.
///
/// Cost per write is proportional to the total number of links.
pub struct FileLinkRepository {
    path: PathBuf,
    table: Mutex<LinkTable>,
}

impl FileLinkRepository {
    /// Opens the store at `path`, loading any existing records.
    ///
    /// A missing or empty file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the file cannot be read or
    /// does not contain a valid record list.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let table = load(&path).await?;

        info!(path = %path.display(), links = table.len(), "Loaded file storage");

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `mutate` to a copy of the table, persists the copy and only
    /// then makes it current. A failed write leaves memory unchanged.
    async fn mutate<T>(&self, mutate: impl FnOnce(&mut LinkTable) -> T) -> Result<T, AppError> {
        let mut table = self.table.lock().await;

        let mut next = table.clone();
        let result = mutate(&mut next);

        save(&self.path, &next).await?;
        *table = next;

        Ok(result)
    }
}

async fn load(path: &Path) -> Result<LinkTable, AppError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LinkTable::new()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(LinkTable::new());
    }

    let records: Vec<LinkRecord> = serde_json::from_str(&content)?;

    Ok(LinkTable::from_records(records))
}

async fn save(path: &Path, table: &LinkTable) -> Result<(), AppError> {
    let data = serde_json::to_vec(&table.to_records())?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    tokio::fs::write(&tmp, data).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}

#[async_trait]
impl LinkRepository for FileLinkRepository {
    fn kind(&self) -> StoreKind {
        StoreKind::File
    }

    async fn find_by_id(
        &self,
        id: &str,
        owner_id: Option<String>,
    ) -> Result<Option<ShortLink>, AppError> {
        Ok(self.table.lock().await.get(id, owner_id.as_deref()))
    }

    async fn insert(&self, link: NewShortLink) -> Result<InsertOutcome, AppError> {
        self.mutate(|table| table.insert(link)).await
    }

    async fn insert_batch(
        &self,
        links: Vec<NewShortLink>,
    ) -> Result<Vec<InsertOutcome>, AppError> {
        self.mutate(|table| table.insert_batch(links)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), AppError> {
        Ok(())
    }
}
