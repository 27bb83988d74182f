//! In-process storage backend

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::backend::KeyValueStore;
use crate::Result;

/// Volatile backend holding slots in a map.
///
/// Used for tests and for embeddings that do not need data to outlive the
/// process.
#[derive(Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently holding a value, sorted
    pub async fn keys(&self) -> Vec<String> {
        let slots = self.slots.read().await;
        let mut keys: Vec<String> = slots.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        slots.remove(key);
        Ok(())
    }
}
