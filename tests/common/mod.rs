#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use golinks::application::services::ShortlinkRepository;
use golinks::domain::entities::ShortlinkRecord;
use golinks::domain::repositories::ShortlinkStorage;
use golinks::error::AppError;
use golinks::infrastructure::cache::{MokaShortlinkCache, NullCache};
use golinks::infrastructure::persistence::InMemoryShortlinkStorage;
use golinks::state::AppState;
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tower::Layer;

pub const FALLBACK_URL: &str = "https://fallback.example.com/";
pub const INDEX_HTML: &str = "<!doctype html><title>GoLinks</title>";
pub const APP_JS: &str = "console.log('golinks');";

/// Inserts a fixed peer address so `PeerIpKeyExtractor` works without a socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Storage holding the given records, no cache.
pub async fn create_test_state(records: Vec<ShortlinkRecord>) -> AppState {
    let storage = Arc::new(InMemoryShortlinkStorage::new());
    for record in records {
        storage.put_data(record).await.unwrap();
    }
    state_with_storage(storage)
}

pub fn state_with_storage(storage: Arc<dyn ShortlinkStorage>) -> AppState {
    let repository = ShortlinkRepository::new(storage, Arc::new(NullCache::new()));
    AppState::new(Arc::new(repository), FALLBACK_URL)
}

pub fn cached_repository(storage: Arc<dyn ShortlinkStorage>) -> ShortlinkRepository {
    ShortlinkRepository::new(
        storage,
        Arc::new(MokaShortlinkCache::new(1_000, Duration::from_secs(60))),
    )
}

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Creates a throwaway SPA build: `index.html` and `static/js/app.js`.
pub fn create_static_dir() -> PathBuf {
    let n = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("golinks-static-{}-{}", std::process::id(), n));
    std::fs::create_dir_all(dir.join("static/js")).unwrap();
    std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.join("static/js/app.js"), APP_JS).unwrap();
    dir
}

/// Storage that always fails as unreachable.
pub struct UnavailableStorage;

#[async_trait]
impl ShortlinkStorage for UnavailableStorage {
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        Err(AppError::storage_unavailable(
            "backend down",
            json!({ "id": id }),
        ))
    }

    async fn put_data(&self, _record: ShortlinkRecord) -> Result<(), AppError> {
        Err(AppError::storage_unavailable("backend down", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// In-memory storage that counts lookups and makes each one slow.
pub struct SlowCountingStorage {
    inner: InMemoryShortlinkStorage,
    delay: Duration,
    pub gets: AtomicUsize,
}

impl SlowCountingStorage {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryShortlinkStorage::new(),
            delay,
            gets: AtomicUsize::new(0),
        }
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShortlinkStorage for SlowCountingStorage {
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.inner.get_data(id).await
    }

    async fn put_data(&self, record: ShortlinkRecord) -> Result<(), AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.put_data(record).await
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// In-memory storage whose next lookup stalls after reading, until released.
pub struct GatedStorage {
    inner: InMemoryShortlinkStorage,
    armed: std::sync::atomic::AtomicBool,
    pub read_done: tokio::sync::Notify,
    pub release: tokio::sync::Notify,
}

impl GatedStorage {
    pub fn new() -> Self {
        Self {
            inner: InMemoryShortlinkStorage::new(),
            armed: std::sync::atomic::AtomicBool::new(true),
            read_done: tokio::sync::Notify::new(),
            release: tokio::sync::Notify::new(),
        }
    }
}

#[async_trait]
impl ShortlinkStorage for GatedStorage {
    async fn get_data(&self, id: &str) -> Result<Option<ShortlinkRecord>, AppError> {
        let result = self.inner.get_data(id).await;
        if self.armed.swap(false, Ordering::SeqCst) {
            self.read_done.notify_one();
            self.release.notified().await;
        }
        result
    }

    async fn put_data(&self, record: ShortlinkRecord) -> Result<(), AppError> {
        self.inner.put_data(record).await
    }

    async fn health_check(&self) -> bool {
        true
    }
}
