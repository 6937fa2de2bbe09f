//! In-memory view of the purchase and sale stores.
//!
//! A [`Ledger`] holds every purchase and sale in store order and answers
//! the point-in-time and range queries the reports are built from. It
//! performs no I/O; loading and appending live in `stockledger-store`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

use crate::{BookingMethod, Purchase, Sale};

/// Revenue and profit accumulated over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of the sell prices of every sale in range.
    pub revenue: Decimal,
    /// Sum of `sell_price - buy_price` over sales whose purchase resolves.
    pub profit: Decimal,
}

/// Purchases and sales in store insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    purchases: Vec<Purchase>,
    sales: Vec<Sale>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from already loaded records.
    pub fn from_records(purchases: Vec<Purchase>, sales: Vec<Sale>) -> Self {
        Self { purchases, sales }
    }

    /// All purchases, in store order.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    /// All sales, in store order.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Record a purchase.
    pub fn push_purchase(&mut self, purchase: Purchase) {
        self.purchases.push(purchase);
    }

    /// Record a sale.
    pub fn push_sale(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Id for the next purchase: one past the highest id in use.
    pub fn next_purchase_id(&self) -> u64 {
        next_id(self.purchases.iter().map(|p| p.id))
    }

    /// Id for the next sale: one past the highest id in use.
    pub fn next_sale_id(&self) -> u64 {
        next_id(self.sales.iter().map(|s| s.id))
    }

    /// Purchases bought on `day`, in store order.
    pub fn inventory_on(&self, day: NaiveDate) -> Vec<&Purchase> {
        self.purchases.iter().filter(|p| p.buy_date == day).collect()
    }

    /// Every batch of every product, grouped by product name.
    ///
    /// Batches keep their store order within each group.
    pub fn purchases_by_product(&self) -> HashMap<&str, Vec<&Purchase>> {
        let mut by_product: HashMap<&str, Vec<&Purchase>> = HashMap::new();
        for purchase in &self.purchases {
            by_product
                .entry(purchase.product_name.as_str())
                .or_default()
                .push(purchase);
        }
        by_product
    }

    /// Whether any sale has consumed the purchase with this id.
    pub fn is_sold(&self, purchase_id: u64) -> bool {
        self.sales.iter().any(|s| s.bought_id == purchase_id)
    }

    /// Pick the unsold batch of `product` a new sale should consume.
    ///
    /// Returns `None` when every batch of the product has been sold, or the
    /// product was never bought.
    pub fn select_batch(&self, product: &str, method: BookingMethod) -> Option<&Purchase> {
        let sold: HashSet<u64> = self.sales.iter().map(|s| s.bought_id).collect();
        let mut unsold = self
            .purchases
            .iter()
            .filter(|p| p.product_name == product && !sold.contains(&p.id));

        match method {
            BookingMethod::Fifo => unsold.next(),
            BookingMethod::Lifo => unsold.last(),
        }
    }

    /// Sales made between `start` and `end`, both inclusive.
    pub fn sales_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Sale> {
        let range = RangeInclusive::new(start, end);
        self.sales
            .iter()
            .filter(|s| range.contains(&s.sell_date))
            .collect()
    }

    /// Revenue and profit of the sales made between `start` and `end`.
    ///
    /// Every sale in range counts toward revenue. Only sales whose
    /// `bought_id` resolves to a purchase count toward profit.
    pub fn revenue_and_profit(&self, start: NaiveDate, end: NaiveDate) -> Totals {
        let by_id: HashMap<u64, &Purchase> = self.purchases.iter().map(|p| (p.id, p)).collect();

        let mut totals = Totals::default();
        for sale in self.sales_between(start, end) {
            totals.revenue += sale.sell_price;
            if let Some(purchase) = by_id.get(&sale.bought_id) {
                totals.profit += sale.sell_price - purchase.buy_price;
            }
        }
        totals
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
