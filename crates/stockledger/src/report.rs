//! Plain-text rendering of report results.
//!
//! Reports are computed by `stockledger-core`; this module only lays the
//! rows and totals out for a terminal.

use std::io::{self, Write};
use stockledger_core::{NaiveDate, Purchase, Totals};

const INVENTORY_HEADERS: [&str; 4] = ["Product Name", "Id", "Buy Price", "Expiration Date"];

/// Message printed when a day has no purchases.
pub const NO_RECORDS: &str = "No inventory records for the specified day.";

/// Write the purchases of a day as a bordered table, or [`NO_RECORDS`].
pub fn write_inventory<W: Write>(rows: &[&Purchase], writer: &mut W) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(writer, "{NO_RECORDS}");
    }

    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|p| {
            [
                p.product_name.clone(),
                p.id.to_string(),
                p.buy_price.to_string(),
                p.expiration_date.to_string(),
            ]
        })
        .collect();

    let mut widths = INVENTORY_HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_border(&widths, '-', writer)?;
    write_row(&widths, &INVENTORY_HEADERS, writer)?;
    write_border(&widths, '=', writer)?;
    for row in &cells {
        write_row(&widths, row, writer)?;
    }
    write_border(&widths, '-', writer)
}

/// Write the revenue and profit lines for a date range.
pub fn write_totals<W: Write>(
    start: NaiveDate,
    end: NaiveDate,
    totals: &Totals,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "Revenue from {start} to {end}: {}", totals.revenue)?;
    writeln!(writer, "Profit from {start} to {end}: {}", totals.profit)
}

fn write_border<W: Write>(widths: &[usize; 4], fill: char, writer: &mut W) -> io::Result<()> {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    writeln!(writer, "{line}")
}

fn write_row<W: Write, S: AsRef<str>>(
    widths: &[usize; 4],
    cells: &[S; 4],
    writer: &mut W,
) -> io::Result<()> {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        line.push_str(&format!(" {:<width$} |", cell.as_ref()));
    }
    writeln!(writer, "{line}")
}
