//! Handler for batch shortening.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::batch::{BatchRequestItem, BatchResponseItem};
use crate::api::extract::{ApiJson, Owner};
use crate::api::handlers::created_or_conflict;
use crate::domain::entities::BatchItem;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens many URLs in one request.
///
/// # Endpoint
///
/// `POST /api/shorten/batch`
///
/// # Request Body
///
/// ```json
/// [
///   { "correlation_id": "c1", "original_url": "https://a.com" },
///   { "correlation_id": "c2", "original_url": "https://b.com" }
/// ]
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "correlation_id": "c1", "short_url": "http://localhost:8080/Ab3dEf7h" },
///   { "correlation_id": "c2", "short_url": "http://localhost:8080/Zz9Yy8Xx" }
/// ]
/// ```
///
/// Items keep request order.
///
/// - **201 Created**: Every item got a new link
/// - **409 Conflict**: At least one item returned an existing link
///
/// # Errors
///
/// Returns 400 Bad Request if the array is empty or any URL is invalid.
/// Nothing is stored in that case.
pub async fn shorten_batch_handler(
    State(state): State<AppState>,
    Owner(owner): Owner,
    ApiJson(payload): ApiJson<Vec<BatchRequestItem>>,
) -> Result<(StatusCode, Json<Vec<BatchResponseItem>>), AppError> {
    let items: Vec<BatchItem> = payload.into_iter().map(BatchItem::from).collect();

    let outcome = state
        .link_service
        .shorten_batch(items, owner.as_deref())
        .await?;

    let response = outcome
        .items
        .into_iter()
        .map(|item| BatchResponseItem {
            short_url: state.short_url(&item.id),
            correlation_id: item.correlation_id,
        })
        .collect();

    Ok((created_or_conflict(outcome.conflict), Json(response)))
}
