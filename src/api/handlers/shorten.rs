//! Handlers for single-URL shortening.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::{ApiJson, Owner};
use crate::api::handlers::outcome_status;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL sent as the raw request body.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```text
/// https://example.com/page
/// ```
///
/// Surrounding whitespace (such as a trailing newline) is ignored.
///
/// # Response
///
/// `text/plain` body with the full short URL:
///
/// - **201 Created**: New link
/// - **409 Conflict**: The caller already shortened this URL; the body
///   carries the existing short URL
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid.
pub async fn shorten_text_handler(
    State(state): State<AppState>,
    Owner(owner): Owner,
    body: String,
) -> Result<(StatusCode, String), AppError> {
    let outcome = state
        .link_service
        .shorten(body.trim(), owner.as_deref())
        .await?;

    Ok((outcome_status(&outcome), state.short_url(outcome.id())))
}

/// Shortens a URL sent as JSON.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "result": "http://localhost:8080/Ab3dEf7h" }
/// ```
///
/// - **201 Created**: New link
/// - **409 Conflict**: Existing link for this URL and owner
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or the URL is invalid.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Owner(owner): Owner,
    ApiJson(payload): ApiJson<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let outcome = state
        .link_service
        .shorten(&payload.url, owner.as_deref())
        .await?;

    let status = outcome_status(&outcome);
    let result = state.short_url(outcome.id());

    Ok((status, Json(ShortenResponse { result })))
}
