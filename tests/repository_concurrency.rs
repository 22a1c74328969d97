mod common;

use common::SlowCountingStorage;
use golinks::domain::entities::ShortlinkRecord;
use golinks::domain::repositories::ShortlinkStorage;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_share_one_storage_call() {
    let storage = Arc::new(SlowCountingStorage::new(Duration::from_millis(100)));
    storage
        .put_data(ShortlinkRecord::new("Test1", "https://github.com/solari23/GoLinks"))
        .await
        .unwrap();

    let repository = Arc::new(common::cached_repository(storage.clone()));

    let lookups: Vec<_> = (0..32)
        .map(|i| {
            let repository = Arc::clone(&repository);
            // Mixed case ids share a cache key.
            let id = if i % 2 == 0 { "Test1" } else { "test1" };
            tokio::spawn(async move { repository.resolve_shortlink(id).await })
        })
        .collect();

    for lookup in lookups {
        let record = lookup.await.unwrap().unwrap().unwrap();
        assert_eq!(record.long_url, "https://github.com/solari23/GoLinks");
    }

    assert_eq!(storage.get_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_misses_share_one_storage_call() {
    let storage = Arc::new(SlowCountingStorage::new(Duration::from_millis(100)));
    let repository = Arc::new(common::cached_repository(storage.clone()));

    let lookups: Vec<_> = (0..16)
        .map(|_| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move { repository.resolve_shortlink("missing").await })
        })
        .collect();

    for lookup in lookups {
        assert!(lookup.await.unwrap().unwrap().is_none());
    }

    assert_eq!(storage.get_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_proceed_while_another_id_is_written() {
    let storage = Arc::new(SlowCountingStorage::new(Duration::from_millis(50)));
    storage
        .put_data(ShortlinkRecord::new("Test1", "https://github.com/solari23/GoLinks"))
        .await
        .unwrap();

    let repository = Arc::new(common::cached_repository(storage.clone()));

    let writer = {
        let repository = Arc::clone(&repository);
        tokio::spawn(async move {
            repository
                .upsert_shortlink(ShortlinkRecord::new("other", "https://other.example.com/"))
                .await
        })
    };

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move { repository.resolve_shortlink("Test1").await })
        })
        .collect();

    for reader in readers {
        let record = reader.await.unwrap().unwrap().unwrap();
        assert_eq!(record.long_url, "https://github.com/solari23/GoLinks");
    }
    writer.await.unwrap().unwrap();

    let other = repository.resolve_shortlink("OTHER").await.unwrap().unwrap();
    assert_eq!(other.long_url, "https://other.example.com/");
}

#[tokio::test]
async fn test_upsert_is_visible_to_next_resolve_through_cache() {
    let storage = Arc::new(SlowCountingStorage::new(Duration::from_millis(1)));
    let repository = common::cached_repository(storage.clone());

    assert!(repository.resolve_shortlink("docs").await.unwrap().is_none());

    repository
        .upsert_shortlink(ShortlinkRecord::new("Docs", "https://docs.example.com/"))
        .await
        .unwrap();

    let record = repository.resolve_shortlink("docs").await.unwrap().unwrap();
    assert_eq!(record.long_url, "https://docs.example.com/");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_upsert_is_visible_after_racing_lookup_finishes() {
    let storage = Arc::new(common::GatedStorage::new());
    let repository = Arc::new(common::cached_repository(storage.clone()));

    // Reads the miss, then stalls before its result reaches the cache.
    let racing_lookup = {
        let repository = Arc::clone(&repository);
        tokio::spawn(async move { repository.resolve_shortlink("docs").await })
    };
    storage.read_done.notified().await;

    repository
        .upsert_shortlink(ShortlinkRecord::new("docs", "https://docs.example.com/"))
        .await
        .unwrap();

    storage.release.notify_one();
    racing_lookup.await.unwrap().unwrap();

    let record = repository.resolve_shortlink("docs").await.unwrap();
    assert_eq!(
        record.map(|r| r.long_url).as_deref(),
        Some("https://docs.example.com/")
    );
}
