//! Traits tying entity types to their collections

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::Collection;

/// An entity stored as one element of a persisted collection
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Partial update; every `Some` field overrides the stored value
    type Patch: Send;

    /// Collection this entity lives in
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// Merge `patch` into `self`. Fields left as `None` are preserved.
    fn apply(&mut self, patch: Self::Patch);
}

/// Creation payload for a [`Record`]; the store supplies id and timestamp.
pub trait NewRecord: Send {
    type Record: Record;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Self::Record;
}

/// Returns `Err(MissingField)` when `value` is blank
pub(crate) fn require(value: &str, field: &'static str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::Error::MissingField(field));
    }
    Ok(())
}
