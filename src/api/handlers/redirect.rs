//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Links are public: the lookup ignores the caller's owner cookie.
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not 8 letters or digits.
/// Returns 404 Not Found if the id is unknown.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.link_service.resolve(&id, None).await?;

    Ok(Redirect::temporary(&original_url))
}
