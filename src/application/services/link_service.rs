//! Link shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{
    BatchItem, BatchOutcome, BatchShortened, InsertOutcome, NewShortLink, ShortenOutcome,
};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Id generation attempts for a single shorten request.
pub const SINGLE_GENERATION_ATTEMPTS: u32 = 10_000;

/// Id generation attempts per item of a batch request.
pub const BATCH_ITEM_GENERATION_ATTEMPTS: u32 = 100;

/// The shortener core.
///
/// Validates requests, generates collision-free short ids and translates
/// storage outcomes into [`ShortenOutcome`] / [`BatchOutcome`]. Storage is
/// only ever touched through the injected [`LinkRepository`].
///
/// # Concurrency
///
/// Probing for a free id and inserting it are two separate store calls.
/// Two concurrent requests may draw the same free id; the relational backend
/// rejects the second insert ([`InsertOutcome::IdTaken`]) and a new id is
/// drawn, the in-memory and file backends let the later write win.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// The storage backend behind this service.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Resolves a short id to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if `id` is not 8 letters or digits;
    /// storage is not consulted in that case.
    ///
    /// Returns [`AppError::NotFound`] if no link with `id` is visible in the
    /// owner scope.
    pub async fn resolve(&self, id: &str, owner_id: Option<&str>) -> Result<String, AppError> {
        validate_code(id)?;

        self.repository
            .find_by_id(id, owner_id.map(str::to_owned))
            .await?
            .map(|link| link.original_url)
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Shortens a single URL.
    ///
    /// Returns [`ShortenOutcome::Existing`] with the pre-existing id when the
    /// owner already shortened the same URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if the URL is not absolute.
    /// Returns [`AppError::GenerationExhausted`] if no free id was found
    /// within [`SINGLE_GENERATION_ATTEMPTS`].
    pub async fn shorten(
        &self,
        original_url: &str,
        owner_id: Option<&str>,
    ) -> Result<ShortenOutcome, AppError> {
        validate_url(original_url).map_err(|e| {
            AppError::invalid_request(
                "Invalid URL",
                json!({ "url": original_url, "reason": e.to_string() }),
            )
        })?;

        let mut attempts_left = SINGLE_GENERATION_ATTEMPTS;

        loop {
            let id = self.generate_unique_id(&mut attempts_left).await?;
            let new_link = NewShortLink::new(
                id.clone(),
                original_url.to_string(),
                owner_id.map(str::to_owned),
            );

            match self.repository.insert(new_link).await? {
                InsertOutcome::Inserted => return Ok(ShortenOutcome::Created(id)),
                InsertOutcome::Conflict { existing_id } => {
                    tracing::debug!(id = %existing_id, "URL already shortened for owner");
                    return Ok(ShortenOutcome::Existing(existing_id));
                }
                InsertOutcome::IdTaken => {
                    tracing::debug!(id = %id, "short id taken at insert, drawing another");
                }
            }
        }
    }

    /// Shortens a batch of URLs.
    ///
    /// Every URL is validated before any id is generated; a single invalid
    /// URL rejects the whole batch and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if the batch is empty or any URL
    /// is invalid; the message names every offending URL.
    /// Returns [`AppError::GenerationExhausted`] if an item finds no free id
    /// within [`BATCH_ITEM_GENERATION_ATTEMPTS`].
    pub async fn shorten_batch(
        &self,
        items: Vec<BatchItem>,
        owner_id: Option<&str>,
    ) -> Result<BatchOutcome, AppError> {
        if items.is_empty() {
            return Err(AppError::invalid_request("Batch is empty", json!({})));
        }

        let invalid: Vec<&str> = items
            .iter()
            .filter(|item| validate_url(&item.original_url).is_err())
            .map(|item| item.original_url.as_str())
            .collect();

        if !invalid.is_empty() {
            return Err(AppError::invalid_request(
                format!("Invalid URLs: {}", invalid.join(", ")),
                json!({ "urls": invalid }),
            ));
        }

        let mut new_links = Vec::with_capacity(items.len());
        for item in &items {
            let mut attempts_left = BATCH_ITEM_GENERATION_ATTEMPTS;
            let id = self.generate_unique_id(&mut attempts_left).await?;

            new_links.push(NewShortLink::new(
                id,
                item.original_url.clone(),
                owner_id.map(str::to_owned),
            ));
        }

        let outcomes = self.repository.insert_batch(new_links.clone()).await?;

        if outcomes.len() != new_links.len() {
            return Err(AppError::internal(
                "Storage returned a mismatched batch result",
                json!({ "expected": new_links.len(), "actual": outcomes.len() }),
            ));
        }

        let mut conflict = false;
        let mut shortened = Vec::with_capacity(items.len());

        for ((item, new_link), outcome) in items.into_iter().zip(new_links).zip(outcomes) {
            let id = match outcome {
                InsertOutcome::Inserted => new_link.id,
                InsertOutcome::Conflict { existing_id } => {
                    conflict = true;
                    existing_id
                }
                InsertOutcome::IdTaken => {
                    return Err(AppError::internal(
                        "Storage reported a taken id inside a batch",
                        json!({ "id": new_link.id }),
                    ));
                }
            };

            shortened.push(BatchShortened {
                correlation_id: item.correlation_id,
                id,
            });
        }

        Ok(BatchOutcome {
            items: shortened,
            conflict,
        })
    }

    /// Liveness check proxied to the store.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Releases the store. Call once at shutdown.
    pub async fn close(&self) -> Result<(), AppError> {
        self.repository.close().await
    }

    /// Constructs the full short URL from the base URL and an id.
    pub fn short_url(&self, base_url: &str, id: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), id)
    }

    /// Draws random ids until one is unused in any owner namespace.
    ///
    /// Every draw consumes one unit of `attempts_left`.
    async fn generate_unique_id(&self, attempts_left: &mut u32) -> Result<String, AppError> {
        while *attempts_left > 0 {
            *attempts_left -= 1;

            let id = generate_code()?;

            if self.repository.find_by_id(&id, None).await?.is_none() {
                return Ok(id);
            }

            tracing::debug!(id = %id, "short id collision");
        }

        Err(AppError::generation_exhausted(
            "Failed to generate a unique short id",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
