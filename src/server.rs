//! HTTP server initialization and runtime setup.
//!
//! Builds storage, cache and repository from configuration, applies seed
//! data, then runs the Axum server until shutdown.

use crate::application::services::{ShortlinkRepository, apply_seed, read_seed_file};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::ShortlinkStorage;
use crate::infrastructure::cache::{MokaShortlinkCache, NullCache, ShortlinkCache};
use crate::infrastructure::persistence::{
    FileShortlinkStorage, InMemoryShortlinkStorage, RetryPolicy, RetryingStorage,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (in-memory or JSON file) wrapped with retries
/// - Moka cache (or NullCache when disabled)
/// - Seed records from `SEED_FILE`
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The storage file cannot be loaded
/// - The seed file is invalid or cannot be written
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(build_repository(&config).await?);

    if let Some(seed_file) = &config.seed_file {
        let records = read_seed_file(seed_file).await?;
        apply_seed(&repository, records)
            .await
            .with_context(|| format!("Failed to apply seed file {}", seed_file))?;
    }

    let state = AppState::new(repository, config.fallback_url.as_str());

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the repository described by `config`.
///
/// # Errors
///
/// Returns an error if the file backend cannot load its file.
pub async fn build_repository(config: &Config) -> Result<ShortlinkRepository> {
    let backend: Arc<dyn ShortlinkStorage> = match config.storage_backend {
        StorageBackend::Memory if config.seed_sample => {
            tracing::info!("Storage: in-memory, seeded with sample record");
            Arc::new(InMemoryShortlinkStorage::with_sample())
        }
        StorageBackend::Memory => {
            tracing::info!("Storage: in-memory");
            Arc::new(InMemoryShortlinkStorage::new())
        }
        StorageBackend::File => {
            let path = config
                .storage_file
                .as_deref()
                .context("STORAGE_FILE must be set when STORAGE_BACKEND is 'file'")?;
            let storage = FileShortlinkStorage::open(path)
                .await
                .with_context(|| format!("Failed to open storage file {}", path))?;
            tracing::info!("Storage: file {}", path);
            Arc::new(storage)
        }
    };

    let policy = RetryPolicy {
        max_retries: config.storage_retry_attempts,
        base_delay: Duration::from_millis(config.storage_retry_base_delay_ms),
        ..RetryPolicy::default()
    };
    let storage: Arc<dyn ShortlinkStorage> = Arc::new(RetryingStorage::new(backend, policy));

    let cache: Arc<dyn ShortlinkCache> = if config.cache_enabled {
        tracing::info!("Cache enabled (moka)");
        Arc::new(MokaShortlinkCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_seconds),
        ))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    Ok(ShortlinkRepository::new(storage, cache))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
