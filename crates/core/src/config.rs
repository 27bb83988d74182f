//! Store configuration
//!
//! Read from the environment:
//! - `CRM_STORAGE_BACKEND`: `file` (default), `memory` or `none`
//! - `CRM_DATA_DIR`: directory for the file backend (default `.crm-data`)

use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::Error;

const DEFAULT_DATA_DIR: &str = ".crm-data";

/// Which backend a store is opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    File,
    Memory,
    /// No persistence at all: reads are empty, writes are dropped
    None,
}

impl FromStr for BackendKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            "none" | "off" => Ok(Self::None),
            _ => Err(Error::InvalidInput(format!(
                "Unsupported storage backend '{}'",
                value
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: BackendKind,
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl StoreConfig {
    /// Build a config from `CRM_STORAGE_BACKEND` and `CRM_DATA_DIR`.
    ///
    /// An unrecognised backend name falls back to the default with a warning.
    pub fn from_env() -> Self {
        Self::from_values(env_value("CRM_STORAGE_BACKEND"), env_value("CRM_DATA_DIR"))
    }

    fn from_values(backend: Option<String>, data_dir: Option<String>) -> Self {
        let backend = match backend {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}; using the file backend", e);
                BackendKind::default()
            }),
            None => BackendKind::default(),
        };

        Self {
            backend,
            data_dir: data_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    pub fn memory() -> Self {
        Self {
            backend: BackendKind::Memory,
            ..Self::default()
        }
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}
