//! DTOs for the single-URL JSON endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /api/shorten` request body.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// `POST /api/shorten` response body.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Full short URL.
    pub result: String,
}
