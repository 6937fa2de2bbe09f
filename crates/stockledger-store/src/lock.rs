//! Scoped exclusive access to a data directory.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::StoreError;

/// A lock file held for the duration of one command.
///
/// The file is created exclusively on [`StoreLock::acquire`] and removed
/// when the guard is dropped.
#[derive(Debug)]
pub struct StoreLock {
    path: PathBuf,
}

impl StoreLock {
    /// Take the lock at `path`, failing with [`StoreError::Locked`] if it is held.
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::Locked { path });
            }
            Err(source) => return Err(StoreError::Write { path, source }),
        };

        // Guard owns the file from here so a failed write still cleans up.
        let lock = Self { path };
        writeln!(file, "{}", std::process::id()).map_err(|source| StoreError::Write {
            path: lock.path.clone(),
            source,
        })?;
        debug!(path = %lock.path.display(), "acquired store lock");
        Ok(lock)
    }

    /// The lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), "failed to release store lock: {e}");
        }
    }
}
