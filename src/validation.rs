//! Record validation.
//!
//! Each record is checked independently and in full: checksum, item code
//! charset, and price signs. All failures are collected rather than stopping
//! at the first, and a failing record never interrupts the batch.

use crate::checksum::checksum;
use crate::transaction::{Status, Transaction, ValidationFailure};
use log::debug;

/// Outcome counts of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationCounts {
    pub valid: usize,
    pub invalid: usize,
}

/// Returns `true` if `code` is non-empty ASCII letters and digits.
pub fn is_valid_item_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Collects every failed check for a record, in check order.
pub fn check(tx: &Transaction) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    let computed = checksum(tx);
    if computed != tx.checksum {
        failures.push(ValidationFailure::ChecksumMismatch {
            expected: tx.checksum,
            computed,
        });
    }

    if !is_valid_item_code(&tx.item_code) {
        failures.push(ValidationFailure::InvalidItemCode);
    }

    if tx.internal_price.is_negative() || tx.sale_price.is_negative() {
        failures.push(ValidationFailure::NegativePrice);
    }

    failures
}

/// Computes the status a record would get from validation.
pub fn evaluate(tx: &Transaction) -> Status {
    let failures = check(tx);
    if failures.is_empty() {
        Status::Valid
    } else {
        Status::Invalid(failures)
    }
}

/// Re-validates every record, overwriting any previous status.
pub fn validate(transactions: &mut [Transaction]) -> ValidationCounts {
    let mut counts = ValidationCounts::default();

    for tx in transactions.iter_mut() {
        tx.status = evaluate(tx);
        if tx.is_valid() {
            counts.valid += 1;
        } else {
            debug!("Bill {}: {}", tx.bill_number, tx.status);
            counts.invalid += 1;
        }
    }

    counts
}
