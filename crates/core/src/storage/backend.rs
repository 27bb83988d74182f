//! Backend trait
//!
//! Defines the interface every storage backend provides.

use async_trait::async_trait;

use crate::Result;

/// String slots addressed by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot was never written or was removed.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot. Removing an absent slot succeeds.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
