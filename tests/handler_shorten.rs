mod common;

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use serde_json::json;
use shorturl::utils::url_validator::MAX_URL_LENGTH;

#[tokio::test]
async fn test_shorten_text_created() {
    let (server, repository) = common::create_test_server();

    let response = server.post("/").text("https://example.com/page").await;

    response.assert_status(StatusCode::CREATED);
    let short_url = response.text();
    let id = common::id_of(&short_url);
    assert_eq!(id.len(), 8);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_shorten_text_trims_trailing_newline() {
    let (server, _) = common::create_test_server();

    let response = server.post("/").text("https://example.com/page\n").await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_shorten_text_conflict_returns_same_url() {
    let (server, repository) = common::create_test_server();

    let first = server.post("/").text("https://example.com/page").await;
    let second = server.post("/").text("https://example.com/page").await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(first.text(), second.text());
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_shorten_text_invalid_url() {
    let (server, repository) = common::create_test_server();

    let response = server.post("/").text("not-a-url").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_request");
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_shorten_json_created() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    let result = json["result"].as_str().unwrap();
    assert!(result.starts_with("http://sho.rt/"));
    assert_eq!(common::id_of(result).len(), 8);
}

#[tokio::test]
async fn test_shorten_json_conflict() {
    let (server, _) = common::create_test_server();
    let body = json!({ "url": "https://example.com" });

    let first = server.post("/api/shorten").json(&body).await;
    let second = server.post("/api/shorten").json(&body).await;

    second.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        first.json::<serde_json::Value>()["result"],
        second.json::<serde_json::Value>()["result"]
    );
}

#[tokio::test]
async fn test_shorten_json_empty_url() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn test_shorten_json_malformed_body() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"url\": "))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn test_shorten_json_missing_content_type() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .text(r#"{"url": "https://example.com"}"#)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_json_wrong_shape() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_owners_get_separate_links() {
    let (server, repository) = common::create_test_server();
    let body = json!({ "url": "https://example.com" });

    let alice = server
        .post("/api/shorten")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&common::owner_cookie("alice")).unwrap(),
        )
        .json(&body)
        .await;
    let bob = server
        .post("/api/shorten")
        .add_header(
            header::COOKIE,
            HeaderValue::from_str(&common::owner_cookie("bob")).unwrap(),
        )
        .json(&body)
        .await;

    alice.assert_status(StatusCode::CREATED);
    bob.assert_status(StatusCode::CREATED);
    assert_ne!(
        alice.json::<serde_json::Value>()["result"],
        bob.json::<serde_json::Value>()["result"]
    );
    assert_eq!(repository.len().await, 2);
}

#[tokio::test]
async fn test_forged_cookie_falls_back_to_no_owner() {
    let (server, _) = common::create_test_server();

    let anonymous = server.post("/").text("https://example.com").await;
    let forged = server
        .post("/")
        .add_header(
            header::COOKIE,
            HeaderValue::from_static("user_id=mallory.deadbeef"),
        )
        .text("https://example.com")
        .await;

    anonymous.assert_status(StatusCode::CREATED);
    forged.assert_status(StatusCode::CONFLICT);
    assert_eq!(anonymous.text(), forged.text());
}

#[tokio::test]
async fn test_shorten_rejects_overlong_url() {
    let (server, repository) = common::create_test_server();
    let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_request");
    assert!(repository.is_empty().await);
}
