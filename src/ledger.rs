//! The in-memory transaction ledger.
//!
//! `Ledger` holds the single ordered record sequence a front end works on and
//! runs the pipeline stages over it. Every operation completes before
//! returning; the caller re-renders afterwards.

use crate::decimal::Amount;
use crate::edit::{apply_edit, EditFields};
use crate::error::{LedgerError, Result};
use crate::export;
use crate::import;
use crate::profit;
use crate::tax::{self, TaxSummary};
use crate::transaction::Transaction;
use crate::validation::{self, ValidationCounts};
use log::{debug, info};
use std::io::{Read, Write};
use std::path::Path;

/// Record counts and running net profit, as shown in a status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub total: usize,
    pub valid: usize,
    /// Every record not currently `Valid`, including unvalidated ones.
    pub invalid: usize,
    /// Sum of every computed profit, whatever the record's status.
    pub net_profit: Amount,
}

/// An ordered, in-memory set of transactions.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Wraps an existing record sequence.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Replaces the ledger's contents with the records in `path`.
    ///
    /// On error the current contents are kept.
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.transactions = import::import_file(path)?;
        Ok(self.transactions.len())
    }

    /// Replaces the ledger's contents with the records read from `reader`.
    pub fn import_reader<R: Read>(&mut self, reader: R) -> Result<usize> {
        self.transactions = import::import_reader(reader)?;
        Ok(self.transactions.len())
    }

    /// Re-validates every record.
    pub fn validate(&mut self) -> ValidationCounts {
        let counts = validation::validate(&mut self.transactions);
        info!(
            "Validation complete: {} valid, {} invalid",
            counts.valid, counts.invalid
        );
        counts
    }

    /// Computes profit for every record.
    pub fn calculate_profits(&mut self) {
        profit::calculate_profits(&mut self.transactions);
    }

    /// Returns `true` if any record has a computed profit.
    pub fn has_profits(&self) -> bool {
        self.transactions.iter().any(|tx| tx.profit.is_some())
    }

    /// Removes records with a computed profit of exactly zero.
    ///
    /// Fails with [`LedgerError::NoProfitsCalculated`] if no profit has been
    /// computed yet.
    pub fn remove_zero_profit(&mut self) -> Result<usize> {
        self.require_profits()?;
        Ok(profit::remove_zero_profit(&mut self.transactions))
    }

    /// Aggregates the valid records and derives tax at `tax_rate` percent.
    pub fn calculate_tax(&self, tax_rate: Amount) -> Result<TaxSummary> {
        self.require_profits()?;
        tax::aggregate(&self.transactions, tax_rate)
    }

    /// Replaces the record at `index` with an edited one.
    pub fn replace(&mut self, index: usize, fields: EditFields) -> Result<&Transaction> {
        let len = self.transactions.len();
        let slot = self
            .transactions
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;

        *slot = apply_edit(slot, fields);
        debug!("Edited transaction {} (bill {})", index, slot.bill_number);
        Ok(slot)
    }

    /// Removes and returns the record at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Transaction> {
        let len = self.transactions.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        let removed = self.transactions.remove(index);
        debug!("Deleted transaction {} (bill {})", index, removed.bill_number);
        Ok(removed)
    }

    /// Exports the ledger to `path`.
    pub fn export_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        export::export_file(path, &self.transactions)?;
        info!(
            "Saved {} transactions to {}",
            self.transactions.len(),
            path.display()
        );
        Ok(())
    }

    /// Writes the export format to any writer.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        export::write_csv(&self.transactions, writer)
    }

    /// Writes the status report to any writer.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<()> {
        export::write_report(&self.transactions, writer)
    }

    /// Counts records by status and sums every computed profit.
    pub fn summary(&self) -> Result<LedgerSummary> {
        let valid = self.transactions.iter().filter(|tx| tx.is_valid()).count();
        let net_profit = self
            .transactions
            .iter()
            .filter_map(|tx| tx.profit)
            .try_fold(Amount::ZERO, |acc, p| acc.checked_add(p))
            .ok_or(LedgerError::Overflow)?;

        Ok(LedgerSummary {
            total: self.transactions.len(),
            valid,
            invalid: self.transactions.len() - valid,
            net_profit,
        })
    }

    fn require_profits(&self) -> Result<()> {
        if self.has_profits() {
            Ok(())
        } else {
            Err(LedgerError::NoProfitsCalculated)
        }
    }
}
