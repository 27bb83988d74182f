//! Core library for the CRM dashboard
//!
//! This crate contains the persistence layer, including:
//! - Entity models (users, organizations, leads, contacts, logs, tasks)
//! - Key-value storage backends
//! - The `CrmStore` handle views read and mutate through

pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;

pub use config::{BackendKind, StoreConfig};
pub use error::Error;
pub use store::CrmStore;
pub type Result<T> = std::result::Result<T, Error>;
