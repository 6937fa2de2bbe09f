//! Data directory layout.

use std::path::{Path, PathBuf};

/// File name of the purchase store.
pub const BOUGHT_FILE: &str = "bought.csv";
/// File name of the sale store.
pub const SOLD_FILE: &str = "sold.csv";
/// File name of the current-day store.
pub const CURRENT_DAY_FILE: &str = "current_day.txt";
/// File name of the lock held while a command runs.
pub const LOCK_FILE: &str = ".stockledger.lock";

/// Location of a stockledger data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the store files.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Create a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the purchase store.
    pub fn bought_path(&self) -> PathBuf {
        self.data_dir.join(BOUGHT_FILE)
    }

    /// Path of the sale store.
    pub fn sold_path(&self) -> PathBuf {
        self.data_dir.join(SOLD_FILE)
    }

    /// Path of the current-day store.
    pub fn current_day_path(&self) -> PathBuf {
        self.data_dir.join(CURRENT_DAY_FILE)
    }

    /// Path of the lock file.
    pub fn lock_path(&self) -> PathBuf {
        self.data_dir.join(LOCK_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
