//! The `report` and `report-revenue-profit` verbs.

use anyhow::{Context, Result};
use std::io::Write;
use stockledger_core::{NaiveDate, Totals};
use stockledger_store::{shift_days, Clock, LedgerStore};
use tracing::{info, warn};

use crate::report;

/// Which day an inventory report covers, relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDay {
    /// The current day.
    Now,
    /// The day before the current day.
    Yesterday,
}

impl ReportDay {
    /// Resolve against the clock.
    pub fn resolve(self, clock: &Clock) -> Result<NaiveDate> {
        let today = clock.get_current_day().context("failed to read current day")?;
        match self {
            Self::Now => Ok(today),
            Self::Yesterday => {
                shift_days(today, -1).with_context(|| format!("no day before {today}"))
            }
        }
    }
}

/// Print the purchases made on the resolved day.
pub fn report_inventory<W: Write>(
    clock: &Clock,
    store: &LedgerStore,
    day: ReportDay,
    writer: &mut W,
) -> Result<NaiveDate> {
    let date = day.resolve(clock)?;
    let ledger = store.load_ledger().context("failed to load ledger")?;
    let rows = ledger.inventory_on(date);
    info!(day = %date, rows = rows.len(), "inventory report");

    report::write_inventory(&rows, writer)?;
    Ok(date)
}

/// Print revenue and profit of the sales between `start` and `end`, inclusive.
pub fn report_revenue_profit<W: Write>(
    store: &LedgerStore,
    start: NaiveDate,
    end: NaiveDate,
    writer: &mut W,
) -> Result<Totals> {
    if start > end {
        warn!(%start, %end, "start date is after end date; no sales can match");
    }

    let ledger = store.load_ledger().context("failed to load ledger")?;
    let totals = ledger.revenue_and_profit(start, end);
    info!(%start, %end, revenue = %totals.revenue, profit = %totals.profit, "revenue report");

    report::write_totals(start, end, &totals, writer)?;
    Ok(totals)
}
