//! HTTP server initialization and runtime setup.
//!
//! Wires the blob store, registry engine, and Axum server lifecycle.

use crate::application::services::{LocalSummarizer, RegistryService};
use crate::config::Config;
use crate::domain::classifier::RandomClassifier;
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::{
    BlobStore, KvEntryRepository, MemoryBlobStore, RedisBlobStore,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the blob store (Redis when configured, with fallback to the
/// in-memory store), the registry engine with its production collaborators,
/// and the Axum server.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails at
/// runtime.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn BlobStore> = if let Some(redis_url) = &config.redis_url {
        match RedisBlobStore::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Entry store backed by Redis");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory store.", e);
                Arc::new(MemoryBlobStore::new())
            }
        }
    } else {
        tracing::info!("Entry store backed by process memory");
        Arc::new(MemoryBlobStore::new())
    };

    let repository = Arc::new(KvEntryRepository::new(store));
    let registry = Arc::new(RegistryService::new(
        repository,
        Arc::new(RandomCodeGenerator::new()),
        Arc::new(SystemClock::new()),
        Arc::new(RandomClassifier::new()),
        config.default_validity_minutes,
    ));

    let state = AppState::new(
        registry,
        Arc::new(LocalSummarizer::new()),
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
