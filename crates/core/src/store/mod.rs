//! CRM data store
//!
//! `CrmStore` is the handle views use to read and mutate the persisted
//! collections. Every operation is best-effort: when the backend is missing
//! or fails, reads come back empty and writes are dropped with a warning.
//! No primitive operation returns an error.

mod activity;
mod organizations;
mod seed;
mod setup;
mod users;

pub use setup::{AdminSetup, ManagerSetup};

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::{BackendKind, StoreConfig};
use crate::model::{generate_id, NewRecord, Record, User};
use crate::storage::{FileStorage, KeyValueStore, MemoryStorage, CURRENT_USER_KEY};
use crate::{Error, Result};

/// Handle to the persisted CRM collections.
///
/// Cloning is cheap; clones share the backend and the mutation lock.
#[derive(Clone)]
pub struct CrmStore {
    backend: Option<Arc<dyn KeyValueStore>>,
    /// Serializes read-modify-write cycles on this handle
    write_lock: Arc<Mutex<()>>,
}

impl CrmStore {
    /// Create a store on top of the given backend
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create a store backed by a fresh [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Create a store with no backend.
    ///
    /// Every read is empty and every write is a no-op.
    pub fn detached() -> Self {
        Self {
            backend: None,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open a store as described by `config`
    pub fn open(config: &StoreConfig) -> Self {
        match config.backend {
            BackendKind::File => {
                info!("Opening CRM store in {:?}", config.data_dir);
                Self::new(Arc::new(FileStorage::new(config.data_dir.clone())))
            }
            BackendKind::Memory => {
                info!("Opening in-memory CRM store");
                Self::in_memory()
            }
            BackendKind::None => {
                info!("Opening CRM store without persistence");
                Self::detached()
            }
        }
    }

    pub fn is_detached(&self) -> bool {
        self.backend.is_none()
    }

    fn backend(&self) -> Result<&Arc<dyn KeyValueStore>> {
        self.backend.as_ref().ok_or(Error::BackendUnavailable)
    }

    async fn read_slot(&self, key: &str) -> Option<String> {
        let result = match self.backend() {
            Ok(backend) => backend.get_item(key).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(value) => value,
            Err(Error::BackendUnavailable) => None,
            Err(e) => {
                warn!("Failed to read slot {}: {}", key, e);
                None
            }
        }
    }

    async fn write_slot(&self, key: &str, value: &str) {
        let result = match self.backend() {
            Ok(backend) => backend.set_item(key, value).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {}
            Err(Error::BackendUnavailable) => debug!("No backend, dropping write to {}", key),
            Err(e) => warn!("Failed to write slot {}: {}", key, e),
        }
    }

    async fn clear_slot(&self, key: &str) {
        let result = match self.backend() {
            Ok(backend) => backend.remove_item(key).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) | Err(Error::BackendUnavailable) => {}
            Err(e) => warn!("Failed to remove slot {}: {}", key, e),
        }
    }

    /// All records of `T`, in insertion order.
    ///
    /// Records that no longer decode (for example an unknown stage name)
    /// are skipped; the rest are returned.
    pub async fn get_all<T: Record>(&self) -> Vec<T> {
        let key = T::COLLECTION.key();
        match self.read_slot(key).await {
            Some(content) => decode_records(key, &content).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Current records of `T` for a read-modify-write cycle.
    ///
    /// Same as [`get_all`](Self::get_all), except that a slot which does
    /// not hold an array is reported as about to be overwritten.
    async fn load_for_write<T: Record>(&self) -> Vec<T> {
        let key = T::COLLECTION.key();
        let Some(content) = self.read_slot(key).await else {
            return Vec::new();
        };
        decode_records(key, &content).unwrap_or_else(|| {
            warn!("Slot {} is unparsable, replacing its contents", key);
            Vec::new()
        })
    }

    /// Overwrite the whole collection of `T` with `items`
    pub async fn save_all<T: Record>(&self, items: &[T]) {
        let _guard = self.write_lock.lock().await;
        self.persist(items).await;
    }

    async fn persist<T: Record>(&self, items: &[T]) {
        let key = T::COLLECTION.key();
        match serde_json::to_string(items) {
            Ok(content) => {
                self.write_slot(key, &content).await;
                debug!("Persisted {} records to {}", items.len(), key);
            }
            Err(e) => warn!("Failed to serialize {}: {}", key, e),
        }
    }

    /// Look up a single record by id
    pub async fn find<T: Record>(&self, id: &str) -> Option<T> {
        self.get_all::<T>()
            .await
            .into_iter()
            .find(|record| record.id() == id)
    }

    /// Append a new record, assigning its id (and creation time where the
    /// entity has one), and return it as stored.
    pub async fn add<N: NewRecord>(&self, new: N) -> N::Record {
        let _guard = self.write_lock.lock().await;
        self.append(new).await
    }

    /// Append without taking the write lock; the caller must hold it.
    async fn append<N: NewRecord>(&self, new: N) -> N::Record {
        let record = new.into_record(generate_id(), Utc::now());

        let mut items = self.load_for_write::<N::Record>().await;
        items.push(record.clone());
        self.persist(&items).await;

        debug!("Added {} to {}", record.id(), <N::Record as Record>::COLLECTION);
        record
    }

    /// Append several records with a single write; the caller must hold
    /// the write lock.
    async fn append_all<N: NewRecord>(&self, new: impl IntoIterator<Item = N>) {
        let mut items = self.load_for_write::<N::Record>().await;
        items.extend(new.into_iter().map(|n| n.into_record(generate_id(), Utc::now())));
        self.persist(&items).await;
    }

    /// Merge `patch` into the record with `id`.
    ///
    /// Returns the updated record, or `None` when no record has that id.
    /// The collection is written back either way.
    pub async fn update<T: Record>(&self, id: &str, patch: T::Patch) -> Option<T> {
        let _guard = self.write_lock.lock().await;
        self.patch(id, patch).await
    }

    /// Update without taking the write lock; the caller must hold it.
    async fn patch<T: Record>(&self, id: &str, patch: T::Patch) -> Option<T> {
        let mut items = self.load_for_write::<T>().await;

        let updated = items.iter_mut().find(|record| record.id() == id).map(|record| {
            record.apply(patch);
            record.clone()
        });
        if updated.is_none() {
            debug!("No record {} in {}", id, T::COLLECTION);
        }

        self.persist(&items).await;
        updated
    }

    /// Remove the record with `id`. Removing an absent id changes nothing.
    pub async fn remove<T: Record>(&self, id: &str) {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load_for_write::<T>().await;
        items.retain(|record| record.id() != id);
        self.persist(&items).await;
    }

    /// The signed-in user, if any
    pub async fn current_user(&self) -> Option<User> {
        let content = self.read_slot(CURRENT_USER_KEY).await?;
        match serde_json::from_str(&content) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Failed to parse current user: {}", e);
                None
            }
        }
    }

    /// Set or clear the signed-in user.
    ///
    /// Clearing removes the slot instead of storing a null marker.
    pub async fn set_current_user(&self, user: Option<&User>) {
        match user {
            Some(user) => match serde_json::to_string(user) {
                Ok(content) => self.write_slot(CURRENT_USER_KEY, &content).await,
                Err(e) => warn!("Failed to serialize current user: {}", e),
            },
            None => self.clear_slot(CURRENT_USER_KEY).await,
        }
    }
}

/// Decode a collection slot, skipping records that fail to decode.
///
/// Returns `None` when the slot is not a JSON array at all.
fn decode_records<T: Record>(key: &str, content: &str) -> Option<Vec<T>> {
    let values: Vec<Value> = match serde_json::from_str(content) {
        Ok(values) => values,
        Err(e) => {
            warn!("Failed to parse slot {}: {}", key, e);
            return None;
        }
    };

    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping record {} in {}: {}", index, key, e);
                None
            }
        })
        .collect();
    Some(records)
}
