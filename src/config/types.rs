use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::directory::DEFAULT_PAGE_SIZE;
use crate::store::DEFAULT_STORAGE_KEY;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Where the persisted state lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Storage slot name (default: "employeeState").
    #[serde(default = "default_storage_key")]
    pub key: String,
}

/// Presentation settings for the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Rows per page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Initial data for a store with nothing persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start with the fifteen sample employees (default: true).
    #[serde(default = "default_mock_employees")]
    pub mock_employees: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_mock_employees() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: default_storage_key(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mock_employees: default_mock_employees(),
        }
    }
}

impl StorageConfig {
    /// Configured directory, or `dirs::data_dir()/employee-directory`.
    /// Falls back to the current directory if no data dir is available.
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("employee-directory")
    }
}
