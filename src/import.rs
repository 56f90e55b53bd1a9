//! Importing transaction files.
//!
//! One record per line, seven comma-separated fields, no header and no
//! quoting. Malformed lines are dropped whole and never reported to the
//! caller; only I/O failures are errors.

use crate::error::Result;
use crate::transaction::{RawTransaction, Transaction};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Imports transactions from the file at `path`, in file order.
pub fn import_file<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!("Importing transactions from {}", path.display());
    import_reader(file)
}

/// Imports transactions from any reader, in input order.
pub fn import_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Skipping undecodable line: {}", e);
                skipped += 1;
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match parse_record(&record) {
            Some(tx) => transactions.push(tx),
            None => {
                debug!("Line {}: skipping malformed record", line);
                skipped += 1;
            }
        }
    }

    info!(
        "Imported {} transactions ({} lines skipped)",
        transactions.len(),
        skipped
    );
    Ok(transactions)
}

/// Parses one split line. Trailing empty fields are dropped before the field
/// count is checked, so `a,b,c,d,e,f,g,,` still has seven fields.
fn parse_record(record: &StringRecord) -> Option<Transaction> {
    let mut fields: Vec<&str> = record.iter().collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    RawTransaction::from_fields(&fields)?.parse()
}
