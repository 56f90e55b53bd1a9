//! Per-record integrity checksum.
//!
//! The checksum is a character-class count over a fixed text template, so the
//! literal words of the template contribute to every result. It catches field
//! corruption; it is not a tamper check.

use crate::decimal::Amount;
use crate::transaction::Transaction;

/// Renders the checksum template for a set of checksummed fields.
pub fn checksum_line(
    item_code: &str,
    internal_price: Amount,
    sale_price: Amount,
    quantity: i32,
    discount: Amount,
) -> String {
    format!(
        "Item: {}, Internal Price: {}, Sale Price: {}, Quantity: {}, Discount: {}",
        item_code,
        internal_price.fixed2(),
        sale_price.fixed2(),
        quantity,
        discount.fixed2()
    )
}

/// Counts uppercase letters, lowercase letters, and decimal digits or `.` in
/// `line`. Other numeric characters such as `²` or `½` are not digits.
pub fn checksum_of_line(line: &str) -> i32 {
    let mut capitals = 0;
    let mut lowercase = 0;
    let mut numeric = 0;

    for c in line.chars() {
        if c.is_uppercase() {
            capitals += 1;
        } else if c.is_lowercase() {
            lowercase += 1;
        } else if c.is_ascii_digit() || c == '.' {
            numeric += 1;
        }
    }

    capitals + lowercase + numeric
}

/// Computes the checksum of a transaction from its current fields.
pub fn checksum(tx: &Transaction) -> i32 {
    checksum_of_line(&checksum_line(
        &tx.item_code,
        tx.internal_price,
        tx.sale_price,
        tx.quantity,
        tx.discount,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn tx(item: &str, internal: &str, sale: &str, quantity: i32, discount: &str) -> Transaction {
        Transaction::new(
            "B",
            item,
            Amount::from_str(internal).unwrap(),
            Amount::from_str(sale).unwrap(),
            quantity,
            Amount::from_str(discount).unwrap(),
            0,
        )
    }

    #[test]
    fn test_template_text() {
        let t = tx("ITEM1", "10.0", "15.0", 2, "0.0");
        assert_eq!(
            checksum_line(&t.item_code, t.internal_price, t.sale_price, t.quantity, t.discount),
            "Item: ITEM1, Internal Price: 10.00, Sale Price: 15.00, Quantity: 2, Discount: 0.00"
        );
    }

    #[test]
    fn test_known_checksums() {
        assert_eq!(checksum(&tx("ITEM1", "10.0", "15.0", 2, "0.0")), 62);
        assert_eq!(checksum(&tx("ITEM2", "20.0", "25.0", 3, "5.0")), 62);
        // '@' is not counted
        assert_eq!(checksum(&tx("ITEM@3", "15.0", "20.0", 1, "0.0")), 62);
        assert_eq!(checksum(&tx("ITEM4", "10.0", "10.0", 1, "0.0")), 62);
    }

    #[test]
    fn test_field_width_changes_checksum() {
        assert_eq!(checksum(&tx("ITEM1", "100.0", "15.0", 2, "0.0")), 63);
        assert_eq!(checksum(&tx("ITEM1", "10.0", "15.0", 12, "0.0")), 63);
        assert_eq!(checksum(&tx("item1", "10.0", "15.0", 2, "0.0")), 62);
        assert_eq!(checksum(&tx("ITEM1", "9.99", "15.0", 2, "0.0")), 61);
    }

    #[test]
    fn test_non_decimal_numerics_not_counted() {
        assert_eq!(checksum(&tx("ITEM²", "10.0", "15.0", 2, "0.0")), 61);
        assert_eq!(checksum(&tx("ITEM½", "10.0", "15.0", 2, "0.0")), 61);
        assert_eq!(checksum_of_line("²½"), 0);
    }

    #[test]
    fn test_minus_sign_not_counted() {
        assert_eq!(
            checksum(&tx("ITEM1", "-10.0", "15.0", 2, "0.0")),
            checksum(&tx("ITEM1", "10.0", "15.0", 2, "0.0"))
        );
    }

    #[test]
    fn test_deterministic() {
        let t = tx("ABC", "1.23", "4.56", 7, "8.9");
        assert_eq!(checksum(&t), checksum(&t));
    }

    #[test]
    fn test_counts_character_classes() {
        assert_eq!(checksum_of_line("Ab1.-, "), 4);
        assert_eq!(checksum_of_line(""), 0);
    }
}
