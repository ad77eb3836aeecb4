//! Persistence layer: blob stores and the entry repository over them.
//!
//! - [`BlobStore`] - keyed binary get/set/enumerate boundary
//! - [`MemoryBlobStore`] - in-process backing for tests and single-node use
//! - [`RedisBlobStore`] - Redis backing for deployments
//! - [`KvEntryRepository`] - [`crate::domain::repositories::EntryRepository`]
//!   implementation serializing entries as JSON blobs

pub mod blob_store;
pub mod kv_entry_repository;
pub mod memory_store;
pub mod redis_store;

pub use blob_store::BlobStore;
pub use kv_entry_repository::KvEntryRepository;
pub use memory_store::MemoryBlobStore;
pub use redis_store::RedisBlobStore;

#[cfg(test)]
pub use blob_store::MockBlobStore;
