//! SQLite storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file. Created on first open.
    pub db_path: PathBuf,
    /// Number of read-only connections. 0 falls back to the pool default.
    pub read_pool_size: usize,
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("car_sales.db"),
            read_pool_size: 2,
            busy_timeout_ms: 5_000,
        }
    }
}
