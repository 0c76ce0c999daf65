//! End-to-end behaviour of the shortener over the in-process backends.

use shorturl::application::services::LinkService;
use shorturl::domain::entities::{BatchItem, ShortenOutcome};
use shorturl::domain::repositories::LinkRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::{FileLinkRepository, MemoryLinkRepository};
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::TempDir;

fn memory_service() -> (LinkService<MemoryLinkRepository>, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    (LinkService::new(repository.clone()), repository)
}

#[tokio::test]
async fn test_shorten_resolve_round_trip() {
    let (service, _) = memory_service();

    let urls = [
        "https://example.com/page",
        "http://example.com:8080/a/b?c=d&e=f#frag",
        "mailto:someone@example.com",
        "https://例え.jp/パス",
    ];

    for url in urls {
        let id = service.shorten(url, None).await.unwrap().into_id();

        assert_eq!(id.len(), 8);
        assert_eq!(service.resolve(&id, None).await.unwrap(), url);
    }
}

#[tokio::test]
async fn test_shorten_twice_returns_same_id_with_conflict() {
    let (service, repository) = memory_service();

    let first = service
        .shorten("https://example.com/page", None)
        .await
        .unwrap();
    let second = service
        .shorten("https://example.com/page", None)
        .await
        .unwrap();

    assert!(matches!(first, ShortenOutcome::Created(_)));
    assert_eq!(second, ShortenOutcome::Existing(first.id().to_string()));
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_shorten_not_a_url() {
    let (service, repository) = memory_service();

    let result = service.shorten("not-a-url", None).await;

    assert!(matches!(result, Err(AppError::InvalidRequest { .. })));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_resolve_malformed_id() {
    let (service, _) = memory_service();

    for id in ["", "abc", "Ab3dEf7h!", "Ab3dEf7hX", "Ab3d Ef7"] {
        let result = service.resolve(id, None).await;

        assert!(matches!(result, Err(AppError::InvalidRequest { .. })), "{id}");
    }
}

#[tokio::test]
async fn test_resolve_unknown_id() {
    let (service, _) = memory_service();

    let result = service.resolve("Zz9Yy8Xx", None).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_resolve_respects_owner_scope() {
    let (service, _) = memory_service();
    let id = service
        .shorten("https://example.com", Some("alice"))
        .await
        .unwrap()
        .into_id();

    assert!(service.resolve(&id, Some("alice")).await.is_ok());
    assert!(matches!(
        service.resolve(&id, Some("bob")).await,
        Err(AppError::NotFound { .. })
    ));
    assert!(service.resolve(&id, None).await.is_ok());
}

#[tokio::test]
async fn test_batch_with_invalid_url_creates_nothing() {
    let (service, repository) = memory_service();

    let result = service
        .shorten_batch(
            vec![
                BatchItem::new("c1", "https://a.com"),
                BatchItem::new("c2", "not-a-url"),
            ],
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::InvalidRequest { .. })));
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_batch_then_resolve() {
    let (service, _) = memory_service();

    let outcome = service
        .shorten_batch(
            vec![
                BatchItem::new("c1", "https://a.com"),
                BatchItem::new("c2", "https://b.com"),
            ],
            None,
        )
        .await
        .unwrap();

    assert!(!outcome.conflict);
    assert_eq!(outcome.items[0].correlation_id, "c1");
    assert_eq!(
        service.resolve(&outcome.items[0].id, None).await.unwrap(),
        "https://a.com"
    );
    assert_eq!(
        service.resolve(&outcome.items[1].id, None).await.unwrap(),
        "https://b.com"
    );
}

#[tokio::test]
async fn test_concurrent_shorten_memory_best_effort() {
    let repository = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repository.clone()));

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..100 {
        let service = service.clone();
        tasks.spawn(async move {
            service
                .shorten(&format!("https://example.com/{}", i), None)
                .await
        });
    }

    let mut ids = HashSet::new();
    while let Some(result) = tasks.join_next().await {
        ids.insert(result.unwrap().unwrap().into_id());
    }

    // A same-id race would overwrite silently; with 62^8 ids it does not
    // happen at this scale.
    assert_eq!(ids.len(), 100);
    assert_eq!(repository.len().await, 100);
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.json");

    let id = {
        let repository = Arc::new(FileLinkRepository::open(&path).await.unwrap());
        let service = LinkService::new(repository);
        let id = service
            .shorten("https://example.com/page", None)
            .await
            .unwrap()
            .into_id();
        service.close().await.unwrap();
        id
    };

    let repository: Arc<dyn LinkRepository> =
        Arc::new(FileLinkRepository::open(&path).await.unwrap());
    let service = LinkService::new(repository);

    assert_eq!(
        service.resolve(&id, None).await.unwrap(),
        "https://example.com/page"
    );
    assert_eq!(
        service
            .shorten("https://example.com/page", None)
            .await
            .unwrap(),
        ShortenOutcome::Existing(id)
    );
}
