//! Flat-file persistence for stockledger.
//!
//! This crate owns the three files a stockledger data directory holds and
//! the operations on them:
//!
//! - [`Clock`] - The simulated "current day" (`current_day.txt`)
//! - [`LedgerStore`] - Append-only purchase and sale stores
//!   (`bought.csv`, `sold.csv`)
//! - [`StoreLock`] - Scoped exclusive access to a data directory
//! - [`StoreConfig`] - Where the files live
//!
//! # Example
//!
//! ```ignore
//! use stockledger_store::{Clock, LedgerStore, StoreConfig};
//!
//! let config = StoreConfig::new("shop");
//! let store = LedgerStore::from_config(&config);
//! store.ensure_initialized()?;
//!
//! let today = Clock::from_config(&config).get_current_day()?;
//! for purchase in store.load_ledger()?.inventory_on(today) {
//!     println!("{purchase}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod config;
mod ledger_store;
mod lock;

pub use clock::{shift_days, Clock};
pub use config::{StoreConfig, BOUGHT_FILE, CURRENT_DAY_FILE, LOCK_FILE, SOLD_FILE};
pub use ledger_store::LedgerStore;
pub use lock::StoreLock;

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur reading or writing a data directory.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading a file.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error creating or writing a file.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded or decoded.
    #[error("malformed record in {}: {source}", .path.display())]
    Csv {
        /// The store file.
        path: PathBuf,
        /// The underlying csv error, including the row position.
        #[source]
        source: csv::Error,
    },

    /// The header row lacks columns the record type needs.
    #[error("{} is missing required columns: {}", .path.display(), .missing.join(", "))]
    MissingColumns {
        /// The store file.
        path: PathBuf,
        /// The absent column names.
        missing: Vec<String>,
    },

    /// The current-day file does not hold an ISO-8601 date.
    #[error("invalid current day {value:?} in {}: {source}", .path.display())]
    InvalidDay {
        /// The current-day file.
        path: PathBuf,
        /// The file content.
        value: String,
        /// The date parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// Advancing the clock left the representable date range.
    #[error("advancing {from} by {days} days is out of range")]
    DateOutOfRange {
        /// The day before advancing.
        from: NaiveDate,
        /// The requested number of days.
        days: i64,
    },

    /// Another process holds the data directory.
    #[error(
        "data directory is locked by {} (remove it if no other stockledger is running)",
        .path.display()
    )]
    Locked {
        /// The lock file.
        path: PathBuf,
    },
}
