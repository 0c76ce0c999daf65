//! DTOs for the batch endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::BatchItem;

/// One entry of the `POST /api/shorten/batch` request array.
#[derive(Debug, Deserialize)]
pub struct BatchRequestItem {
    pub correlation_id: String,
    pub original_url: String,
}

impl From<BatchRequestItem> for BatchItem {
    fn from(item: BatchRequestItem) -> Self {
        BatchItem::new(item.correlation_id, item.original_url)
    }
}

/// One entry of the response array, in request order.
#[derive(Debug, Serialize)]
pub struct BatchResponseItem {
    pub correlation_id: String,
    pub short_url: String,
}
