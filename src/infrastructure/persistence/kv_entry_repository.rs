//! Blob-store backed implementation of the entry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::blob_store::BlobStore;
use crate::domain::entities::{ClickEvent, Entry};
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Key namespace for serialized entries within the blob store.
const ENTRY_KEY_PREFIX: &str = "entry:";

/// Stored representation of an [`Entry`].
///
/// Round-trips every entity field losslessly; a permanent entry keeps
/// `expires_at` as JSON `null`.
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    id: Uuid,
    target: String,
    shortcode: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    clicks: Vec<ClickEvent>,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            target: entry.target.clone(),
            shortcode: entry.shortcode.clone(),
            created_at: entry.created_at,
            expires_at: entry.expires_at,
            clicks: entry.clicks.clone(),
        }
    }
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Self {
            id: record.id,
            target: record.target,
            shortcode: record.shortcode,
            created_at: record.created_at,
            expires_at: record.expires_at,
            clicks: record.clicks,
        }
    }
}

/// Entry repository over a keyed blob store.
///
/// Entries are stored as JSON under `entry:{shortcode}`; the shortcode is
/// immutable, so the key doubles as the entry's identity. All mutations
/// funnel through a single async mutex, giving the check-then-write in
/// [`insert_new`](EntryRepository::insert_new) and the
/// read-modify-append-write in
/// [`append_click`](EntryRepository::append_click) single-writer
/// discipline. Readers never take the lock.
pub struct KvEntryRepository {
    store: Arc<dyn BlobStore>,
    write_lock: Mutex<()>,
}

impl KvEntryRepository {
    /// Creates a repository over the given blob store.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn entry_key(code: &str) -> String {
        format!("{}{}", ENTRY_KEY_PREFIX, code)
    }

    fn encode(entry: &Entry) -> Result<Vec<u8>, AppError> {
        serde_json::to_vec(&EntryRecord::from(entry))
            .map_err(|e| AppError::storage(format!("failed to encode entry: {}", e)))
    }

    fn decode(bytes: &[u8]) -> Result<Entry, AppError> {
        let record: EntryRecord = serde_json::from_slice(bytes)
            .map_err(|e| AppError::storage(format!("corrupt entry record: {}", e)))?;

        Ok(record.into())
    }

    async fn load(&self, code: &str) -> Result<Option<Entry>, AppError> {
        match self.store.get(&Self::entry_key(code)).await? {
            Some(bytes) => Ok(Some(Self::decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl EntryRepository for KvEntryRepository {
    async fn insert_new(&self, entry: Entry) -> Result<Entry, AppError> {
        let _guard = self.write_lock.lock().await;

        if self.load(&entry.shortcode).await?.is_some() {
            return Err(AppError::code_taken(entry.shortcode));
        }

        self.store
            .set(&Self::entry_key(&entry.shortcode), Self::encode(&entry)?)
            .await?;

        Ok(entry)
    }

    async fn find_by_shortcode(&self, code: &str) -> Result<Option<Entry>, AppError> {
        self.load(code).await
    }

    async fn list_all(&self) -> Result<Vec<Entry>, AppError> {
        let mut entries = Vec::new();

        for key in self.store.keys().await? {
            let Some(code) = key.strip_prefix(ENTRY_KEY_PREFIX) else {
                continue;
            };

            if let Some(entry) = self.load(code).await? {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn save(&self, entry: &Entry) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        self.store
            .set(&Self::entry_key(&entry.shortcode), Self::encode(entry)?)
            .await
    }

    async fn append_click(&self, code: &str, click: ClickEvent) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut entry) = self.load(code).await? else {
            return Ok(false);
        };

        // Re-checked under the lock: expired entries never accrue clicks,
        // even if the entry expired between the caller's lookup and now.
        if entry.is_expired_at(click.timestamp) {
            return Ok(false);
        }

        entry.clicks.push(click);

        self.store
            .set(&Self::entry_key(code), Self::encode(&entry)?)
            .await?;

        Ok(true)
    }
}
