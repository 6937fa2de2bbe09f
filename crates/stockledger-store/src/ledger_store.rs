//! Append-only purchase and sale stores.
//!
//! Each store is a comma-separated file with a header row. Rows are only
//! ever appended; reading always scans the whole file.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stockledger_core::{Ledger, Purchase, Sale, PURCHASE_COLUMNS, SALE_COLUMNS};
use tracing::debug;

use crate::{StoreConfig, StoreError};

/// The purchase ("bought") and sale ("sold") stores of a data directory.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    bought: PathBuf,
    sold: PathBuf,
}

impl LedgerStore {
    /// Create a store over explicit purchase and sale files.
    pub fn new(bought: impl Into<PathBuf>, sold: impl Into<PathBuf>) -> Self {
        Self {
            bought: bought.into(),
            sold: sold.into(),
        }
    }

    /// Create a store over the files of a data directory.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.bought_path(), config.sold_path())
    }

    /// Path of the purchase store.
    pub fn bought_path(&self) -> &Path {
        &self.bought
    }

    /// Path of the sale store.
    pub fn sold_path(&self) -> &Path {
        &self.sold
    }

    /// Create whichever store file is missing, with its header row only.
    ///
    /// Existing files are left untouched.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        create_with_header(&self.bought, &PURCHASE_COLUMNS)?;
        create_with_header(&self.sold, &SALE_COLUMNS)
    }

    /// Append one purchase row.
    pub fn append_purchase(&self, purchase: &Purchase) -> Result<(), StoreError> {
        append_row(&self.bought, purchase)?;
        debug!(id = purchase.id, product = %purchase.product_name, "appended purchase");
        Ok(())
    }

    /// Append one sale row.
    pub fn append_sale(&self, sale: &Sale) -> Result<(), StoreError> {
        append_row(&self.sold, sale)?;
        debug!(
            id = sale.id,
            product = %sale.product_name,
            bought_id = sale.bought_id,
            "appended sale"
        );
        Ok(())
    }

    /// Every purchase, in store order.
    pub fn load_purchases(&self) -> Result<Vec<Purchase>, StoreError> {
        read_rows(&self.bought, &PURCHASE_COLUMNS)
    }

    /// Every purchase grouped by product name, batches in store order.
    pub fn load_all_purchases(&self) -> Result<HashMap<String, Vec<Purchase>>, StoreError> {
        let mut by_product: HashMap<String, Vec<Purchase>> = HashMap::new();
        for purchase in self.load_purchases()? {
            by_product
                .entry(purchase.product_name.clone())
                .or_default()
                .push(purchase);
        }
        Ok(by_product)
    }

    /// Every sale, in store order.
    pub fn load_all_sales(&self) -> Result<Vec<Sale>, StoreError> {
        read_rows(&self.sold, &SALE_COLUMNS)
    }

    /// Load both stores.
    pub fn load_ledger(&self) -> Result<Ledger, StoreError> {
        let ledger = Ledger::from_records(self.load_purchases()?, self.load_all_sales()?);
        debug!(
            purchases = ledger.purchases().len(),
            sales = ledger.sales().len(),
            "loaded ledger"
        );
        Ok(ledger)
    }
}

fn create_with_header(path: &Path, columns: &[&str]) -> Result<(), StoreError> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(source) => {
            return Err(StoreError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(columns)
        .map_err(|source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "created store");
    Ok(())
}

fn append_row<T: Serialize>(path: &Path, record: &T) -> Result<(), StoreError> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(record).map_err(|source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<T: DeserializeOwned>(path: &Path, columns: &[&str]) -> Result<Vec<T>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let csv_error = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_reader(file);
    let headers = reader.headers().map_err(csv_error)?;
    let missing: Vec<String> = columns
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    reader
        .deserialize()
        .map(|row| row.map_err(csv_error))
        .collect()
}
