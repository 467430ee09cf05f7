//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places used for currency display unless configured otherwise.
pub const DEFAULT_DISPLAY_PRECISION: u32 = 2;

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The exact amount, unrounded.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "EUR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Indonesian Rupiah
    Idr,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Returns the symbol printed in front of amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Idr => "Rp",
            Self::Jpy => "¥",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the amount rounded for display, midpoint away from zero.
    #[must_use]
    pub fn rounded(&self, precision: u32) -> Decimal {
        round_for_display(self.amount, precision)
    }

    /// Formats the amount as `$1,666.67` (or `-$200.00`).
    #[must_use]
    pub fn display(&self, precision: u32) -> String {
        let grouped = group_thousands(self.rounded(precision).abs());
        let sign = if self.is_negative() && !self.rounded(precision).is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{}{grouped}", self.currency.symbol())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display(DEFAULT_DISPLAY_PRECISION))
    }
}

/// Rounds an amount to `precision` places and pads the scale so that
/// `1666.666…` becomes `1666.67` and `100` becomes `100.00`.
#[must_use]
pub fn round_for_display(amount: Decimal, precision: u32) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded
}

fn group_thousands(amount: Decimal) -> String {
    let text = amount.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Idr => write!(f, "IDR"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount, Currency::Usd);
        assert_eq!(money.amount, amount);
        assert_eq!(money.currency, Currency::Usd);
    }

    #[test]
    fn test_money_is_negative() {
        assert!(!Money::new(dec!(10), Currency::Usd).is_negative());
        assert!(Money::new(dec!(-10), Currency::Usd).is_negative());
        assert!(!Money::new(dec!(0), Currency::Usd).is_negative());
    }

    #[test]
    fn test_rounded_is_midpoint_away_from_zero() {
        let money = Money::new(dec!(500000) / dec!(300), Currency::Usd);
        assert_eq!(money.rounded(2), dec!(1666.67));

        let half = Money::new(dec!(0.125), Currency::Usd);
        assert_eq!(half.rounded(2), dec!(0.13));
    }

    #[rstest]
    #[case(dec!(1666.6666), "$1,666.67")]
    #[case(dec!(100), "$100.00")]
    #[case(dec!(9840), "$9,840.00")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(-200), "-$200.00")]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(-0.001), "$0.00")]
    fn test_display(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount, Currency::Usd).to_string(), expected);
    }

    #[test]
    fn test_display_custom_precision_and_symbol() {
        let money = Money::new(dec!(1200), Currency::Eur);
        assert_eq!(money.display(0), "€1,200");
        assert_eq!(money.display(3), "€1,200.000");
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::Jpy.to_string(), "JPY");
    }
}
