//! Transaction records and their validation status.

use crate::decimal::Amount;
use std::fmt;
use std::str::FromStr;

/// Number of comma-separated fields in an import line.
pub const FIELD_COUNT: usize = 7;

/// Raw transaction line as split from an import file.
///
/// Holds the field text untouched so that parsing can reject the whole line
/// if any numeric field is malformed.
#[derive(Debug, Clone)]
pub struct RawTransaction {
    pub bill_number: String,
    pub item_code: String,
    pub internal_price: String,
    pub sale_price: String,
    pub quantity: String,
    pub discount: String,
    pub checksum: String,
}

impl RawTransaction {
    /// Builds a raw record from exactly [`FIELD_COUNT`] fields.
    ///
    /// Returns `None` for any other field count.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        match fields {
            [bill, item, internal, sale, quantity, discount, checksum] => Some(RawTransaction {
                bill_number: bill.as_ref().to_string(),
                item_code: item.as_ref().to_string(),
                internal_price: internal.as_ref().to_string(),
                sale_price: sale.as_ref().to_string(),
                quantity: quantity.as_ref().to_string(),
                discount: discount.as_ref().to_string(),
                checksum: checksum.as_ref().to_string(),
            }),
            _ => None,
        }
    }

    /// Parses the raw fields into a typed transaction.
    ///
    /// Returns `None` if any numeric field fails to parse. Text fields are
    /// trimmed; nothing else about them is checked here.
    pub fn parse(&self) -> Option<Transaction> {
        let internal_price = Amount::from_str(&self.internal_price).ok()?;
        let sale_price = Amount::from_str(&self.sale_price).ok()?;
        let quantity = self.quantity.trim().parse::<i32>().ok()?;
        let discount = Amount::from_str(&self.discount).ok()?;
        let checksum = self.checksum.trim().parse::<i32>().ok()?;

        Some(Transaction::new(
            self.bill_number.trim(),
            self.item_code.trim(),
            internal_price,
            sale_price,
            quantity,
            discount,
            checksum,
        ))
    }
}

/// A sales transaction line.
///
/// # Invariants
///
/// - `checksum` only means something relative to `item_code`, the two prices,
///   `quantity` and `discount`; changing any of them stales it.
/// - `profit` is `None` until profit calculation runs. `Some(0)` is a computed
///   zero, not "unknown".
/// - `status` changes only through validation or an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Bill identifier; not required to be unique.
    pub bill_number: String,

    /// Item identifier; valid when ASCII alphanumeric.
    pub item_code: String,

    /// Unit cost to the seller.
    pub internal_price: Amount,

    /// Unit sale price before discount.
    pub sale_price: Amount,

    pub quantity: i32,

    /// Discount percentage, nominally 0 to 100. Not range-checked.
    pub discount: Amount,

    /// Supplied on import, recomputed on edit.
    pub checksum: i32,

    pub profit: Option<Amount>,

    pub status: Status,
}

impl Transaction {
    /// Creates an unvalidated transaction with no computed profit.
    pub fn new(
        bill_number: impl Into<String>,
        item_code: impl Into<String>,
        internal_price: Amount,
        sale_price: Amount,
        quantity: i32,
        discount: Amount,
        checksum: i32,
    ) -> Self {
        Transaction {
            bill_number: bill_number.into(),
            item_code: item_code.into(),
            internal_price,
            sale_price,
            quantity,
            discount,
            checksum,
            profit: None,
            status: Status::NotValidated,
        }
    }

    /// Returns `true` if the last validation (or edit) marked this record valid.
    pub fn is_valid(&self) -> bool {
        matches!(self.status, Status::Valid)
    }
}

/// Validation state of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    NotValidated,
    Valid,
    /// Every failed check, in check order. Never empty.
    Invalid(Vec<ValidationFailure>),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NotValidated => write!(f, "Not validated"),
            Status::Valid => write!(f, "Valid"),
            Status::Invalid(failures) => {
                let reasons: Vec<String> = failures.iter().map(|r| r.to_string()).collect();
                write!(f, "Invalid: {}", reasons.join(", "))
            }
        }
    }
}

/// A single failed validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Stored checksum differs from the recomputed one.
    ChecksumMismatch { expected: i32, computed: i32 },

    /// Item code is empty or contains a non-alphanumeric character.
    InvalidItemCode,

    /// Internal or sale price is below zero.
    NegativePrice,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::ChecksumMismatch { expected, computed } => write!(
                f,
                "Checksum mismatch (expected {}, got {})",
                expected, computed
            ),
            ValidationFailure::InvalidItemCode => {
                write!(f, "Item code contains special characters")
            }
            ValidationFailure::NegativePrice => write!(f, "Negative price value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fields: [&str; 7]) -> RawTransaction {
        RawTransaction::from_fields(&fields).unwrap()
    }

    #[test]
    fn test_parse_line() {
        let tx = raw(["B001", "ITEM1", "10.0", "15.0", "2", "0.0", "62"])
            .parse()
            .unwrap();

        assert_eq!(tx.bill_number, "B001");
        assert_eq!(tx.item_code, "ITEM1");
        assert_eq!(tx.internal_price, Amount::from(10));
        assert_eq!(tx.sale_price, Amount::from(15));
        assert_eq!(tx.quantity, 2);
        assert!(tx.discount.is_zero());
        assert_eq!(tx.checksum, 62);
        assert_eq!(tx.profit, None);
        assert_eq!(tx.status, Status::NotValidated);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let tx = raw([" B001 ", " ITEM1", " 10.0 ", "15.0 ", " 2 ", " 0.0", " 62 "])
            .parse()
            .unwrap();

        assert_eq!(tx.bill_number, "B001");
        assert_eq!(tx.item_code, "ITEM1");
        assert_eq!(tx.quantity, 2);
        assert_eq!(tx.checksum, 62);
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(raw(["B1", "I1", "x", "1", "1", "0", "1"]).parse().is_none());
        assert!(raw(["B1", "I1", "1", "1", "1.5", "0", "1"]).parse().is_none());
        assert!(raw(["B1", "I1", "1", "1", "1", "", "1"]).parse().is_none());
        assert!(raw(["B1", "I1", "1", "1", "1", "0", "62.0"]).parse().is_none());
    }

    #[test]
    fn test_parse_keeps_negative_prices() {
        let tx = raw(["B1", "I1", "-1.0", "2.0", "1", "0", "1"]).parse().unwrap();
        assert!(tx.internal_price.is_negative());
    }

    #[test]
    fn test_from_fields_requires_seven() {
        assert!(RawTransaction::from_fields(&["a", "b", "c"]).is_none());
        assert!(RawTransaction::from_fields(&["1", "2", "3", "4", "5", "6", "7", "8"]).is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::NotValidated.to_string(), "Not validated");
        assert_eq!(Status::Valid.to_string(), "Valid");

        let status = Status::Invalid(vec![
            ValidationFailure::ChecksumMismatch {
                expected: 0,
                computed: 62,
            },
            ValidationFailure::InvalidItemCode,
        ]);
        assert_eq!(
            status.to_string(),
            "Invalid: Checksum mismatch (expected 0, got 62), Item code contains special characters"
        );
    }
}
