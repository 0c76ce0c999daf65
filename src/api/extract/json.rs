//! JSON body extractor with the service's error format.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Like [`axum::Json`], but every rejection (missing content type,
/// syntax error, wrong shape) becomes a `400` [`AppError::InvalidRequest`].
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::invalid_request(
                "Invalid JSON body",
                json!({ "reason": rejection.body_text() }),
            )),
        }
    }
}
