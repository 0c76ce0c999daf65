mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;
use shorturl::domain::entities::{InsertOutcome, NewShortLink, ShortLink};
use shorturl::domain::repositories::{LinkRepository, StoreKind};
use shorturl::error::AppError;
use std::sync::Arc;

/// Store whose backend is gone.
struct UnreachableRepository;

#[async_trait]
impl LinkRepository for UnreachableRepository {
    fn kind(&self) -> StoreKind {
        StoreKind::Postgres
    }

    async fn find_by_id(
        &self,
        _id: &str,
        _owner_id: Option<String>,
    ) -> Result<Option<ShortLink>, AppError> {
        Err(unreachable_error())
    }

    async fn insert(&self, _link: NewShortLink) -> Result<InsertOutcome, AppError> {
        Err(unreachable_error())
    }

    async fn insert_batch(
        &self,
        _links: Vec<NewShortLink>,
    ) -> Result<Vec<InsertOutcome>, AppError> {
        Err(unreachable_error())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_error())
    }

    async fn close(&self) -> Result<(), AppError> {
        Ok(())
    }
}

fn unreachable_error() -> AppError {
    AppError::store_unavailable(
        "Database error",
        json!({ "reason": "connection refused at 10.0.0.5:5432" }),
    )
}

#[tokio::test]
async fn test_ping_ok() {
    let (server, _) = common::create_test_server();

    let response = server.get("/ping").await;

    response.assert_status_ok();
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_ping_store_down() {
    let server = common::create_server_with(Arc::new(UnreachableRepository));

    let response = server.get("/ping").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_health_ok() {
    let (server, _) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["backend"], "memory");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded() {
    let server = common::create_server_with(Arc::new(UnreachableRepository));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["backend"], "postgres");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_error_is_opaque() {
    let server = common::create_server_with(Arc::new(UnreachableRepository));

    let response = server.post("/").text("https://example.com").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(body.contains("store_unavailable"));
    assert!(!body.contains("10.0.0.5"));
}
