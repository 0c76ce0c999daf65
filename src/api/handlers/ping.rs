//! Handler for the storage liveness probe.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// `GET /ping`
///
/// Returns 200 if the storage backend answers, 500 otherwise. The body is
/// always empty.
pub async fn ping_handler(State(state): State<AppState>) -> StatusCode {
    match state.link_service.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(error = %e, "storage ping failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
