//! Key-value storage backends
//!
//! The store persists every collection as one JSON string under a fixed
//! key, the way a browser keeps data in `localStorage`. Backends only deal
//! in opaque strings.

mod backend;
mod file;
mod keys;
mod memory;

pub use backend::KeyValueStore;
pub use file::FileStorage;
pub use keys::{Collection, CURRENT_USER_KEY};
pub use memory::MemoryStorage;
