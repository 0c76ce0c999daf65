//! API route configuration.

use crate::api::handlers::{
    health_handler, ping_handler, redirect_handler, shorten_batch_handler, shorten_handler,
    shorten_text_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /`                   - Shorten a raw-text URL
/// - `POST /api/shorten`        - Shorten a JSON `{ "url" }`
/// - `POST /api/shorten/batch`  - Shorten many URLs
/// - `GET  /ping`               - Storage liveness
/// - `GET  /health`             - Health report
/// - `GET  /{id}`               - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_text_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/api/shorten/batch", post(shorten_batch_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
}
