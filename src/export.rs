//! Writing transactions back out.
//!
//! The export format is the import format plus a header line, with prices and
//! discount fixed to two decimals. It is written without quoting so that it
//! re-imports exactly as written.

use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header line of the export format.
pub const EXPORT_HEADER: [&str; 7] = [
    "BillNumber",
    "ItemCode",
    "InternalPrice",
    "SalePrice",
    "Quantity",
    "Discount",
    "Checksum",
];

/// Writes transactions in the export format.
///
/// Profit and status are not persisted.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    if transactions.is_empty() {
        return Err(LedgerError::NoTransactions);
    }

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(EXPORT_HEADER)?;

    for tx in transactions {
        csv_writer.write_record([
            tx.bill_number.clone(),
            tx.item_code.clone(),
            tx.internal_price.fixed2(),
            tx.sale_price.fixed2(),
            tx.quantity.to_string(),
            tx.discount.fixed2(),
            tx.checksum.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Exports transactions to a new file at `path`, replacing any existing file.
pub fn export_file<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> Result<()> {
    if transactions.is_empty() {
        return Err(LedgerError::NoTransactions);
    }
    let file = File::create(path)?;
    write_csv(transactions, file)
}

/// One row of the status report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ReportRow<'a> {
    bill_number: &'a str,
    item_code: &'a str,
    internal_price: String,
    sale_price: String,
    quantity: i32,
    discount: String,
    checksum: i32,
    profit: String,
    status: String,
}

impl<'a> From<&'a Transaction> for ReportRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        ReportRow {
            bill_number: &tx.bill_number,
            item_code: &tx.item_code,
            internal_price: tx.internal_price.fixed2(),
            sale_price: tx.sale_price.fixed2(),
            quantity: tx.quantity,
            discount: tx.discount.fixed2(),
            checksum: tx.checksum,
            profit: tx.profit.map(|p| p.fixed2()).unwrap_or_default(),
            status: tx.status.to_string(),
        }
    }
}

/// Writes a CSV report of every record with its profit and status.
///
/// Unlike the export format, fields are quoted where needed since status text
/// can contain commas.
pub fn write_report<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // serialize() only emits the header with the first row
    if transactions.is_empty() {
        csv_writer.write_record(EXPORT_HEADER.iter().chain(["Profit", "Status"].iter()))?;
    }

    for tx in transactions {
        csv_writer.serialize(ReportRow::from(tx))?;
    }

    csv_writer.flush()?;
    Ok(())
}
