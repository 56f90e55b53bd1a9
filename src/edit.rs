//! Editing records from user-entered text.
//!
//! Edits are trusted: the replacement gets a fresh checksum and is marked
//! `Valid` without running the validator.

use crate::checksum::checksum;
use crate::decimal::Amount;
use crate::error::{LedgerError, Result};
use crate::profit::profit_of;
use crate::transaction::{Status, Transaction};
use log::warn;
use std::str::FromStr;

/// Field text as typed into an edit form.
#[derive(Debug, Clone, Default)]
pub struct EditForm {
    pub bill_number: String,
    pub item_code: String,
    pub internal_price: String,
    pub sale_price: String,
    pub quantity: String,
    pub discount: String,
}

impl EditForm {
    /// Pre-fills a form with a record's current values.
    pub fn from_transaction(tx: &Transaction) -> Self {
        EditForm {
            bill_number: tx.bill_number.clone(),
            item_code: tx.item_code.clone(),
            internal_price: tx.internal_price.to_string(),
            sale_price: tx.sale_price.to_string(),
            quantity: tx.quantity.to_string(),
            discount: tx.discount.to_string(),
        }
    }

    /// Parses the numeric fields.
    ///
    /// Fails on the first field that is not a number; nothing is changed.
    pub fn parse(&self) -> Result<EditFields> {
        Ok(EditFields {
            bill_number: self.bill_number.clone(),
            item_code: self.item_code.clone(),
            internal_price: parse_amount("internal price", &self.internal_price)?,
            sale_price: parse_amount("sale price", &self.sale_price)?,
            quantity: self
                .quantity
                .trim()
                .parse()
                .map_err(|_| invalid("quantity", &self.quantity))?,
            discount: parse_amount("discount", &self.discount)?,
        })
    }
}

/// Typed replacement values for a record.
#[derive(Debug, Clone, PartialEq)]
pub struct EditFields {
    pub bill_number: String,
    pub item_code: String,
    pub internal_price: Amount,
    pub sale_price: Amount,
    pub quantity: i32,
    pub discount: Amount,
}

/// Builds the replacement for `previous` from `fields`.
///
/// The result carries a freshly computed checksum and `Valid` status. If
/// `previous` had a profit, the replacement's profit is recomputed from the new
/// fields; otherwise it stays absent.
pub fn apply_edit(previous: &Transaction, fields: EditFields) -> Transaction {
    let mut tx = Transaction::new(
        fields.bill_number,
        fields.item_code,
        fields.internal_price,
        fields.sale_price,
        fields.quantity,
        fields.discount,
        0,
    );
    tx.checksum = checksum(&tx);
    tx.status = Status::Valid;
    if previous.profit.is_some() {
        tx.profit = profit_of(&tx);
        if tx.profit.is_none() {
            warn!("Bill {}: profit out of range, left uncalculated", tx.bill_number);
        }
    }
    tx
}

/// Parses a tax rate percentage entered by the user.
pub fn parse_tax_rate(text: &str) -> Result<Amount> {
    parse_amount("tax rate", text)
}

fn parse_amount(field: &'static str, text: &str) -> Result<Amount> {
    Amount::from_str(text).map_err(|_| invalid(field, text))
}

fn invalid(field: &'static str, text: &str) -> LedgerError {
    LedgerError::InvalidNumber {
        field,
        value: text.to_string(),
    }
}
