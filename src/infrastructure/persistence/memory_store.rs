//! In-process blob store.

use super::blob_store::BlobStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// A `HashMap`-backed store for single-process deployments and tests.
///
/// Data survives for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        debug!("Using in-memory blob store");
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| AppError::storage("memory store lock poisoned"))?;

        Ok(blobs.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AppError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| AppError::storage("memory store lock poisoned"))?;

        blobs.insert(key.to_string(), value);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, AppError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| AppError::storage("memory store lock poisoned"))?;

        Ok(blobs.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryBlobStore::new();
        store.set("k1", b"payload".to_vec()).await.unwrap();

        assert_eq!(store.get("k1").await.unwrap(), Some(b"payload".to_vec()));
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let store = MemoryBlobStore::new();
        store.set("k1", b"old".to_vec()).await.unwrap();
        store.set("k1", b"new".to_vec()).await.unwrap();

        assert_eq!(store.get("k1").await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn test_keys_enumeration() {
        let store = MemoryBlobStore::new();
        store.set("a", vec![1]).await.unwrap();
        store.set("b", vec![2]).await.unwrap();

        let mut keys = store.keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
