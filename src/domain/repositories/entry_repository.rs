//! Repository trait for registry entry data access.

use crate::domain::entities::{ClickEvent, Entry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the entry store.
///
/// Lookups never mutate shared state and may run fully in parallel. The two
/// write paths are the serialization points required by the registry:
/// [`insert_new`](Self::insert_new) is a conditional write keyed on
/// shortcode, and [`append_click`](Self::append_click) is a serialized
/// read-modify-append-write on a single entry's click history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvEntryRepository`] - blob-store backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Inserts a new entry if and only if its shortcode is unregistered.
    ///
    /// Two concurrent inserts racing on the same shortcode must not both
    /// succeed; exactly one does.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeTaken`] if the shortcode already exists,
    /// live or expired. Returns [`AppError::StorageUnavailable`] on
    /// backing-store failure.
    async fn insert_new(&self, entry: Entry) -> Result<Entry, AppError>;

    /// Finds an entry by its shortcode (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backing-store failure.
    async fn find_by_shortcode(&self, code: &str) -> Result<Option<Entry>, AppError>;

    /// Lists all entries ordered by creation instant, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backing-store failure.
    async fn list_all(&self) -> Result<Vec<Entry>, AppError>;

    /// Insert-or-replace keyed by entry identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backing-store failure.
    async fn save(&self, entry: &Entry) -> Result<(), AppError>;

    /// Appends a click to an entry's history.
    ///
    /// Serialized per entry so concurrent clicks are never lost to a
    /// last-writer-wins overwrite. The append is refused (returning
    /// `Ok(false)`) when the entry is missing or already expired at the
    /// event's timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backing-store failure.
    async fn append_click(&self, code: &str, click: ClickEvent) -> Result<bool, AppError>;
}
