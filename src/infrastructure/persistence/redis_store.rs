//! Redis-backed blob store.

use super::blob_store::BlobStore;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::info;

/// Blob store backed by Redis.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Unlike a cache, storage errors are propagated, never masked: a failed
/// write after a passed uniqueness check must reach the caller.
pub struct RedisBlobStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisBlobStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis blob store");

        let client = Client::open(redis_url)
            .map_err(|e| AppError::storage(format!("failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::storage(format!("failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| AppError::storage(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            conn: manager,
            key_prefix: "ql:".to_string(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl BlobStore for RedisBlobStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let mut conn = self.conn.clone();

        conn.get::<_, Option<Vec<u8>>>(self.build_key(key))
            .await
            .map_err(|e| AppError::storage(format!("Redis GET failed: {}", e)))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AppError> {
        let mut conn = self.conn.clone();

        conn.set::<_, _, ()>(self.build_key(key), value)
            .await
            .map_err(|e| AppError::storage(format!("Redis SET failed: {}", e)))
    }

    async fn keys(&self) -> Result<Vec<String>, AppError> {
        let mut conn = self.conn.clone();

        let prefixed: Vec<String> = redis::cmd("KEYS")
            .arg(format!("{}*", self.key_prefix))
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::storage(format!("Redis KEYS failed: {}", e)))?;

        Ok(prefixed
            .into_iter()
            .filter_map(|k| {
                k.strip_prefix(&self.key_prefix)
                    .map(|stripped| stripped.to_string())
            })
            .collect())
    }
}
