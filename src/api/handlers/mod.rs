//! HTTP request handlers.

pub mod batch;
pub mod health;
pub mod ping;
pub mod redirect;
pub mod shorten;

pub use batch::shorten_batch_handler;
pub use health::health_handler;
pub use ping::ping_handler;
pub use redirect::redirect_handler;
pub use shorten::{shorten_handler, shorten_text_handler};

use axum::http::StatusCode;

use crate::domain::entities::ShortenOutcome;

/// `201 Created` for a new link, `409 Conflict` when an existing id was returned.
pub(crate) fn created_or_conflict(conflict: bool) -> StatusCode {
    if conflict {
        StatusCode::CONFLICT
    } else {
        StatusCode::CREATED
    }
}

pub(crate) fn outcome_status(outcome: &ShortenOutcome) -> StatusCode {
    created_or_conflict(outcome.is_conflict())
}
