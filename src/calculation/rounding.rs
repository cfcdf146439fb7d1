//! Currency rounding for salary figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by a salary figure.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a monetary value to [`CURRENCY_DP`] decimal places, half away
/// from zero.
///
/// Every bonus rule rounds its final figure before it is cached, so
/// subordinate sums are built from already-rounded salaries rather than
/// deferring all rounding to the end.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("5602.97025").unwrap();
/// assert_eq!(round_currency(value), Decimal::from_str("5602.97").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round_currency(dec("10.444")), dec("10.44"));
    }

    #[test]
    fn test_rounds_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec("10.445")), dec("10.45"));
    }

    #[test]
    fn test_leaves_two_dp_values_unchanged() {
        assert_eq!(round_currency(dec("10.44")), dec("10.44"));
    }

    #[test]
    fn test_rounds_whole_numbers_to_same_value() {
        assert_eq!(round_currency(dec("6500")), dec("6500"));
    }
}
