//! Keyed blob store boundary.
//!
//! The entry repository serializes entries to and from this interface; the
//! backing medium (in-process map, Redis) is an external decision. The core
//! assumes nothing about durability beyond "survives for the lifetime of
//! the process/session".

use crate::error::AppError;
use async_trait::async_trait;

/// A keyed binary store with get/set/enumerate semantics.
///
/// All failures surface as [`AppError::StorageUnavailable`]; implementations
/// must never mask an I/O error as an absent key or a successful write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Stores `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), AppError>;

    /// Enumerates all keys currently present.
    async fn keys(&self) -> Result<Vec<String>, AppError>;
}
