//! Top-level router with middleware.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests running longer than `REQUEST_TIMEOUT` are
//!   dropped with `408 Request Timeout`; dropping the handler future
//!   cancels its storage I/O

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::api::middleware::tracing as trace;
use crate::state::AppState;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(trace::layer())
}
