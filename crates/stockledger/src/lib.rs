//! Shop inventory CLI.
//!
//! This crate provides the `stockledger` command for keeping the books of a
//! small shop in flat files:
//!
//! - `buy` / `sell`: Record a purchased batch or the sale of one
//! - `report --now` / `report --yesterday`: Show what was bought on a day
//! - `report-revenue-profit`: Sum revenue and profit over a date range
//! - `--advance-time N`: Move the simulated current day forward
//!
//! # Example Usage
//!
//! ```bash
//! stockledger buy -p Apples -d 2024-01-01 --price 1.50 -e 2024-06-01
//! stockledger sell -p Apples -s 2024-01-02 --sell-price 2.25
//! stockledger --advance-time 1 report --yesterday
//! stockledger report-revenue-profit --start-date 2024-01-01 --end-date 2024-01-31
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod report;
