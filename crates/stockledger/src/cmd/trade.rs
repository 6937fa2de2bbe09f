//! The `buy` and `sell` verbs.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::Write;
use stockledger_core::{BookingMethod, Ledger, NaiveDate, Purchase, Sale};
use stockledger_store::LedgerStore;
use tracing::info;

/// What a `sell` command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SellOutcome {
    /// The sale was recorded.
    Sold(Sale),
    /// No unsold batch of the product exists; nothing was written.
    OutOfStock,
}

/// Record a purchased batch and confirm it.
pub fn buy<W: Write>(
    store: &LedgerStore,
    product: &str,
    buy_date: NaiveDate,
    price: Decimal,
    expiration: NaiveDate,
    writer: &mut W,
) -> Result<Purchase> {
    // Purchase ids depend on the purchase store alone.
    let purchases = store
        .load_purchases()
        .context("failed to load purchases")?;
    let id = Ledger::from_records(purchases, Vec::new()).next_purchase_id();
    let purchase = Purchase::new(id, product, buy_date, price, expiration);
    store
        .append_purchase(&purchase)
        .context("failed to record purchase")?;
    info!(id = purchase.id, product, "recorded purchase");

    writeln!(
        writer,
        "Bought {product} on {buy_date} for {price} with expiration date {expiration} added to inventory"
    )?;
    Ok(purchase)
}

/// Sell one unsold batch of `product`, chosen by `method`.
///
/// Selling a product with no unsold batch is not an error: it prints an
/// out-of-stock message and leaves the sale store untouched.
pub fn sell<W: Write>(
    store: &LedgerStore,
    product: &str,
    sell_date: NaiveDate,
    sell_price: Decimal,
    method: BookingMethod,
    writer: &mut W,
) -> Result<SellOutcome> {
    let ledger = store.load_ledger().context("failed to load ledger")?;
    let Some(batch) = ledger.select_batch(product, method) else {
        info!(product, "out of stock");
        writeln!(writer, "{product} is out of stock!")?;
        return Ok(SellOutcome::OutOfStock);
    };

    let sale = Sale::new(ledger.next_sale_id(), product, batch.id, sell_date, sell_price);
    store.append_sale(&sale).context("failed to record sale")?;
    info!(id = sale.id, product, bought_id = sale.bought_id, %method, "recorded sale");

    writeln!(writer, "Sold {product} for {sell_price}")?;
    Ok(SellOutcome::Sold(sale))
}
