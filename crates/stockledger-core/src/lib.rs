//! Core types for stockledger
//!
//! This crate provides the domain types shared by the store and the CLI:
//!
//! - [`Purchase`] - A bought product batch
//! - [`Sale`] - A sold batch, referencing its purchase
//! - [`BookingMethod`] - Which unsold batch a sale consumes
//! - [`Ledger`] - Purchases and sales with the inventory and revenue queries
//! - [`Totals`] - Revenue and profit over a date range
//!
//! # Example
//!
//! ```
//! use stockledger_core::{BookingMethod, Ledger, Purchase, Sale};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expires = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! let mut ledger = Ledger::new();
//! let id = ledger.next_purchase_id();
//! ledger.push_purchase(Purchase::new(id, "Pens", day, dec!(1.00), expires));
//!
//! // Sell the earliest unsold batch of pens
//! let batch = ledger.select_batch("Pens", BookingMethod::Fifo).unwrap();
//! let sale = Sale::new(ledger.next_sale_id(), "Pens", batch.id, day, dec!(3.00));
//! ledger.push_sale(sale);
//!
//! let totals = ledger.revenue_and_profit(day, day);
//! assert_eq!(totals.revenue, dec!(3.00));
//! assert_eq!(totals.profit, dec!(2.00));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod booking;
pub mod ledger;
pub mod record;

pub use booking::BookingMethod;
pub use ledger::{Ledger, Totals};
pub use record::{Purchase, Sale, PURCHASE_COLUMNS, SALE_COLUMNS};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
