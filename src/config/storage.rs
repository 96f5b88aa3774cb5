//! Document storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which DocumentStore adapter to open
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// JSON file holding all documents (file backend only)
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn is_file(&self) -> bool {
        self.backend == StorageBackend::File
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_file() && self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyStoragePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("./data/theses.json")
}
