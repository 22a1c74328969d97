use golinks::config::{Config, StorageBackend};
use golinks::domain::entities::ShortlinkRecord;
use golinks::server::build_repository;

fn config(backend: StorageBackend, storage_file: Option<String>) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        fallback_url: "https://fallback.example.com/".to_string(),
        storage_backend: backend,
        storage_file,
        seed_sample: true,
        seed_file: None,
        cache_enabled: true,
        cache_capacity: 100,
        cache_ttl_seconds: 60,
        storage_retry_attempts: 1,
        storage_retry_base_delay_ms: 1,
        static_dir: "public".to_string(),
    }
}

#[tokio::test]
async fn test_memory_backend_serves_sample_record() {
    let repository = build_repository(&config(StorageBackend::Memory, None))
        .await
        .unwrap();

    let record = repository.resolve_shortlink("test1").await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://github.com/solari23/GoLinks");
    assert!(repository.storage_healthy().await);
    assert_eq!(repository.cache().name(), "moka");
}

#[tokio::test]
async fn test_memory_backend_without_sample_is_empty() {
    let mut config = config(StorageBackend::Memory, None);
    config.seed_sample = false;
    config.cache_enabled = false;

    let repository = build_repository(&config).await.unwrap();

    assert!(repository.resolve_shortlink("Test1").await.unwrap().is_none());
    assert_eq!(repository.cache().name(), "disabled");
}

#[tokio::test]
async fn test_file_backend_persists_across_restarts() {
    let path = std::env::temp_dir().join(format!("golinks-wiring-{}.json", std::process::id()));
    let _ = tokio::fs::remove_file(&path).await;
    let config = config(
        StorageBackend::File,
        Some(path.to_string_lossy().into_owned()),
    );

    let repository = build_repository(&config).await.unwrap();
    repository
        .upsert_shortlink(
            ShortlinkRecord::new("Docs", "https://docs.example.com/").with_preserve_http_method(false),
        )
        .await
        .unwrap();
    drop(repository);

    let reopened = build_repository(&config).await.unwrap();
    let record = reopened.resolve_shortlink("DOCS").await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://docs.example.com/");
    assert!(!record.preserve_http_method);

    tokio::fs::remove_file(&path).await.ok();
}
