//! Results of insert and shorten operations.

/// What a storage backend did with a single insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was stored under the supplied id.
    Inserted,
    /// The same URL already exists for the same owner; nothing was stored.
    Conflict { existing_id: String },
    /// The supplied id is already in use. Only backends that enforce id
    /// uniqueness at write time report this.
    IdTaken,
}

/// Result of [`crate::application::services::LinkService::shorten`].
///
/// `Existing` is the duplicate-URL case: the URL was already shortened for
/// this owner and the pre-existing id is returned instead of a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Created(String),
    Existing(String),
}

impl ShortenOutcome {
    pub fn id(&self) -> &str {
        match self {
            ShortenOutcome::Created(id) | ShortenOutcome::Existing(id) => id,
        }
    }

    pub fn into_id(self) -> String {
        match self {
            ShortenOutcome::Created(id) | ShortenOutcome::Existing(id) => id,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ShortenOutcome::Existing(_))
    }
}

/// One shortened item of a batch, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchShortened {
    pub correlation_id: String,
    pub id: String,
}

/// Result of [`crate::application::services::LinkService::shorten_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub items: Vec<BatchShortened>,
    /// True when at least one item resolved to a pre-existing id.
    pub conflict: bool,
}
