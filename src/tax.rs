//! Profit/loss aggregation and tax due.

use crate::decimal::Amount;
use crate::error::{LedgerError, Result};
use crate::transaction::Transaction;

/// Totals over the valid records of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSummary {
    /// Sum of positive profits.
    pub total_profit: Amount,

    /// Sum of the magnitudes of non-positive profits.
    pub total_loss: Amount,

    /// `total_profit - total_loss`.
    pub net_profit: Amount,

    /// `net_profit * rate / 100`. Negative when `net_profit` is; not clamped.
    pub tax: Amount,
}

/// Aggregates profit and loss over records with status `Valid` and derives
/// the tax due at `tax_rate` percent.
///
/// Records that are invalid or not yet validated are ignored whatever their
/// profit. Profits must be calculated first: a valid record without one is
/// [`LedgerError::ProfitNotCalculated`].
pub fn aggregate(transactions: &[Transaction], tax_rate: Amount) -> Result<TaxSummary> {
    let mut total_profit = Amount::ZERO;
    let mut total_loss = Amount::ZERO;

    for tx in transactions.iter().filter(|tx| tx.is_valid()) {
        let profit = tx.profit.ok_or_else(|| LedgerError::ProfitNotCalculated {
            bill_number: tx.bill_number.clone(),
        })?;

        if profit.is_positive() {
            total_profit = total_profit
                .checked_add(profit)
                .ok_or(LedgerError::Overflow)?;
        } else {
            total_loss = total_loss
                .checked_add(profit.abs())
                .ok_or(LedgerError::Overflow)?;
        }
    }

    let net_profit = total_profit
        .checked_sub(total_loss)
        .ok_or(LedgerError::Overflow)?;
    let tax = net_profit
        .checked_mul(tax_rate)
        .and_then(|t| t.checked_div(Amount::HUNDRED))
        .ok_or(LedgerError::Overflow)?;

    Ok(TaxSummary {
        total_profit,
        total_loss,
        net_profit,
        tax,
    })
}
