//! Entity models
//!
//! One module per persisted collection, plus the traits the store uses to
//! treat them uniformly.

mod communication;
mod contact;
mod domain;
mod id;
mod lead;
mod organization;
mod record;
mod task;
mod user;

pub use communication::*;
pub use contact::*;
pub use domain::EnumDomain;
pub use id::generate_id;
pub use lead::*;
pub use organization::*;
pub use record::{NewRecord, Record};
pub(crate) use record::require;
pub use task::*;
pub use user::*;
