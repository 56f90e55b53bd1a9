//! Exact decimal amounts for prices, discounts, profits and tax.
//!
//! Wraps `rust_decimal` so that profit arithmetic is exact in base 10. A
//! profit of `15.00 * 2 - 10.00 * 2` is exactly zero, which the zero-profit
//! filter relies on.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// An exact decimal amount.
///
/// Unlike a fixed-scale money type, `Amount` keeps whatever scale its
/// arithmetic produces; formatting to two places happens only at the edges
/// (checksum template, export, reports) via [`Amount::fixed2`].
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use tax_ledger::Amount;
///
/// let price = Amount::from_str(" 15.0 ").unwrap();
/// assert_eq!(price.fixed2(), "15.00");
/// assert_eq!(price.to_string(), "15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// One hundred, the percentage denominator.
    pub const HUNDRED: Self = Amount(Decimal::ONE_HUNDRED);

    /// Wraps a `Decimal` as-is.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns the underlying decimal.
    pub fn into_inner(self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `true` if this value is strictly above zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn abs(self) -> Self {
        Amount(self.0.abs())
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.0.checked_mul(rhs.0).map(Amount)
    }

    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.0.checked_div(rhs.0).map(Amount)
    }

    /// Formats with exactly two decimal places, rounding half away from zero.
    pub fn fixed2(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    /// Parses plain (`12.5`) or scientific (`1.25e1`) notation, ignoring
    /// surrounding whitespace. Digit separators (`1_000`) are rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.contains('_') {
            return Err(rust_decimal::Error::ErrorString(format!(
                "Invalid decimal: digit separator in {:?}",
                trimmed
            )));
        }
        let decimal = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_from_str_trims_and_accepts_scientific() {
        assert_eq!(amount("  2.5  "), amount("2.5"));
        assert_eq!(amount("1e2"), amount("100"));
        assert_eq!(amount("1.25e1"), amount("12.5"));
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("").is_err());
    }

    #[test]
    fn test_from_str_rejects_digit_separators() {
        assert!(Amount::from_str("1_0").is_err());
        assert!(Amount::from_str("1_0.0").is_err());
        assert!(Amount::from_str("1_0e1").is_err());
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(amount("10.0"), amount("10.0000"));
        assert_eq!(amount("10.50").to_string(), "10.5");
    }

    #[test]
    fn test_fixed2_pads_and_rounds_half_away_from_zero() {
        assert_eq!(amount("10").fixed2(), "10.00");
        assert_eq!(amount("0.5").fixed2(), "0.50");
        assert_eq!(amount("0.125").fixed2(), "0.13");
        assert_eq!(amount("0.615").fixed2(), "0.62");
        assert_eq!(amount("2.124").fixed2(), "2.12");
        assert_eq!(amount("-1.005").fixed2(), "-1.01");
        assert_eq!(amount("9.999").fixed2(), "10.00");
    }

    #[test]
    fn test_sign_predicates() {
        assert!(amount("-0.01").is_negative());
        assert!(!Amount::ZERO.is_negative());
        assert!(!Amount::ZERO.is_positive());
        assert!(Amount::ZERO.is_zero());
        assert!(amount("0.000").is_zero());
        assert_eq!(amount("-3.5").abs(), amount("3.5"));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = amount("1.5");
        let b = amount("2.5");
        assert_eq!(a.checked_add(b), Some(amount("4")));
        assert_eq!(a.checked_sub(b), Some(amount("-1")));
        assert_eq!(a.checked_mul(Amount::from(2)), Some(amount("3")));
        assert_eq!(amount("5").checked_div(Amount::HUNDRED), Some(amount("0.05")));
        assert_eq!(Amount::new(Decimal::MAX).checked_add(b), None);
    }
}
