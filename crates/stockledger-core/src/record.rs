//! Purchase and sale records.
//!
//! Both record types are immutable once written and map one-to-one onto a
//! row of their flat-file store. Field order matches the store's column
//! order.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns of the purchase ("bought") store, in file order.
pub const PURCHASE_COLUMNS: [&str; 5] = [
    "id",
    "product_name",
    "buy_date",
    "buy_price",
    "expiration_date",
];

/// Columns of the sale ("sold") store, in file order.
pub const SALE_COLUMNS: [&str; 5] = ["id", "product_name", "bought_id", "sell_date", "sell_price"];

/// A logged acquisition of a product batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// Identity within the purchase store.
    pub id: u64,
    /// Name of the product bought.
    pub product_name: String,
    /// Day the batch was bought.
    pub buy_date: NaiveDate,
    /// Price paid for the batch.
    #[serde(with = "rust_decimal::serde::str")]
    pub buy_price: Decimal,
    /// Day the batch expires.
    pub expiration_date: NaiveDate,
}

impl Purchase {
    /// Create a new purchase record.
    pub fn new(
        id: u64,
        product_name: impl Into<String>,
        buy_date: NaiveDate,
        buy_price: Decimal,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            buy_date,
            buy_price,
            expiration_date,
        }
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} bought {} for {} (expires {})",
            self.id, self.product_name, self.buy_date, self.buy_price, self.expiration_date
        )
    }
}

/// A logged disposal of a previously purchased batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Identity within the sale store.
    pub id: u64,
    /// Name of the product sold.
    pub product_name: String,
    /// Id of the purchase this sale consumed.
    pub bought_id: u64,
    /// Day of the sale.
    pub sell_date: NaiveDate,
    /// Price the batch was sold for.
    #[serde(with = "rust_decimal::serde::str")]
    pub sell_price: Decimal,
}

impl Sale {
    /// Create a new sale record.
    pub fn new(
        id: u64,
        product_name: impl Into<String>,
        bought_id: u64,
        sell_date: NaiveDate,
        sell_price: Decimal,
    ) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            bought_id,
            sell_date,
            sell_price,
        }
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} sold {} for {} (batch #{})",
            self.id, self.product_name, self.sell_date, self.sell_price, self.bought_id
        )
    }
}
