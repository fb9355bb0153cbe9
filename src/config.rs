use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a store keeps its data
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbTarget {
    /// Private in-memory database, gone when the store is dropped
    #[default]
    InMemory,
    /// SQLite database file, created if missing
    File(PathBuf),
}

/// Table store configuration
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub target: DbTarget,
}

impl StoreConfig {
    /// Config for a fresh in-memory database
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Config for a file-backed database at `db_path`
    pub fn file(db_path: impl Into<PathBuf>) -> Self {
        Self {
            target: DbTarget::File(db_path.into()),
        }
    }
}
