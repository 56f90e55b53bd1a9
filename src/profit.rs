//! Per-record profit and the zero-profit filter.

use crate::decimal::Amount;
use crate::transaction::Transaction;
use log::{debug, warn};

/// Profit of a line from its inputs:
/// `sale * quantity * (1 - discount / 100) - internal * quantity`.
///
/// Returns `None` if the arithmetic leaves the decimal range.
pub fn profit_from(
    internal_price: Amount,
    sale_price: Amount,
    quantity: i32,
    discount: Amount,
) -> Option<Amount> {
    let quantity = Amount::from(quantity);
    let kept = Amount::from(1).checked_sub(discount.checked_div(Amount::HUNDRED)?)?;
    let revenue = sale_price.checked_mul(quantity)?.checked_mul(kept)?;
    let cost = internal_price.checked_mul(quantity)?;
    revenue.checked_sub(cost)
}

/// Profit of a transaction from its current fields.
pub fn profit_of(tx: &Transaction) -> Option<Amount> {
    profit_from(tx.internal_price, tx.sale_price, tx.quantity, tx.discount)
}

/// Computes and stores profit on every record, whatever its status.
///
/// Overwrites earlier values. A record whose profit overflows is left with no
/// profit.
pub fn calculate_profits(transactions: &mut [Transaction]) {
    for tx in transactions.iter_mut() {
        tx.profit = profit_of(tx);
        if tx.profit.is_none() {
            warn!("Bill {}: profit out of range, left uncalculated", tx.bill_number);
        }
    }
}

/// Removes records whose computed profit is exactly zero.
///
/// Records without a computed profit are kept. Returns how many were removed.
pub fn remove_zero_profit(transactions: &mut Vec<Transaction>) -> usize {
    let before = transactions.len();
    transactions.retain(|tx| !tx.profit.is_some_and(|p| p.is_zero()));
    let removed = before - transactions.len();
    debug!("Removed {} zero-profit transactions", removed);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    fn tx(bill: &str, internal: &str, sale: &str, quantity: i32, discount: &str) -> Transaction {
        Transaction::new(bill, "ITEM", amount(internal), amount(sale), quantity, amount(discount), 0)
    }

    #[test]
    fn test_profit_without_discount() {
        assert_eq!(profit_of(&tx("B1", "10.0", "15.0", 2, "0.0")), Some(amount("10")));
    }

    #[test]
    fn test_profit_with_discount() {
        assert_eq!(profit_of(&tx("B2", "20.0", "25.0", 3, "5.0")), Some(amount("11.25")));
    }

    #[test]
    fn test_loss_is_negative_profit() {
        assert_eq!(profit_of(&tx("B3", "20.0", "10.0", 1, "0.0")), Some(amount("-10")));
        assert_eq!(profit_of(&tx("B4", "0", "10.0", 1, "150")), Some(amount("-5")));
    }

    #[test]
    fn test_profit_overflow_is_none() {
        let huge = tx("B5", "1", "79228162514264337593543950335", 2, "0");
        assert_eq!(profit_of(&huge), None);
    }

    #[test]
    fn test_calculate_overwrites_previous_profit() {
        let mut txs = vec![tx("B1", "10.0", "15.0", 2, "0.0")];
        txs[0].profit = Some(amount("999"));
        txs[0].status = crate::transaction::Status::Invalid(vec![]);

        calculate_profits(&mut txs);
        assert_eq!(txs[0].profit, Some(amount("10")));
    }

    #[test]
    fn test_remove_zero_profit_keeps_uncalculated() {
        let mut txs = vec![
            tx("B1", "10.0", "15.0", 2, "0.0"),
            tx("B2", "10.0", "10.0", 1, "0.0"),
            tx("B3", "10.0", "10.0", 1, "0.0"),
        ];
        txs[0].profit = Some(amount("10"));
        txs[1].profit = Some(amount("0.00"));

        let removed = remove_zero_profit(&mut txs);

        assert_eq!(removed, 1);
        let bills: Vec<&str> = txs.iter().map(|t| t.bill_number.as_str()).collect();
        assert_eq!(bills, vec!["B1", "B3"]);
    }

    #[test]
    fn test_remove_zero_profit_exact_comparison() {
        let mut txs = vec![tx("B1", "0", "0", 1, "0")];
        txs[0].profit = Some(amount("0.0000001"));
        assert_eq!(remove_zero_profit(&mut txs), 0);
    }
}
