//! # Money Module
//!
//! Provides the `Money` type for invoice amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "1875.25" is parsed exactly to 187525 cents                         │
//! │    Sorting compares integers, display groups digits                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use invoice_core::money::Money;
//!
//! let amount: Money = "1875.25".parse().unwrap();
//! assert_eq!(amount.cents(), 187525);
//! assert_eq!(amount.to_grouped_string(), "1,875.25");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// Ordering on `Money` is numeric ordering, which is what the amount column
/// sorts by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// let amount = Money::from_cents(62000); // Represents $620.00
    /// assert_eq!(amount.cents(), 62000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats the amount with thousands separators and exactly two
    /// decimal places, without a currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(187525).to_grouped_string(), "1,875.25");
    /// assert_eq!(Money::from_cents(62000).to_grouped_string(), "620.00");
    /// assert_eq!(Money::from_cents(-123456789).to_grouped_string(), "-1,234,567.89");
    /// ```
    pub fn to_grouped_string(&self) -> String {
        let whole = self.dollars().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);

        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, grouped, self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal literal such as `"1250.00"`, `"3420.5"` or `"620"`.
///
/// Accepts an optional leading `-`, at least one integer digit, and at most
/// two fractional digits. No grouping separators, no exponent, no symbol.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidAmount {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (body, ""),
        };

        if whole.is_empty() {
            return Err(invalid("missing integer digits"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("not a decimal number"));
        }
        if frac.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid("amount too large"))?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("not a decimal number"))? * 10,
            _ => frac.parse().map_err(|_| invalid("not a decimal number"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the plain decimal form (`1875.25`), the same form
/// `FromStr` accepts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Decimal String Serde
// =============================================================================

/// Serde adapter that reads and writes `Money` as a decimal string.
///
/// Used by the embedded dataset so amounts never pass through `f64`.
///
/// ```rust,ignore
/// #[serde(with = "crate::money::decimal")]
/// pub amount: Money,
/// ```
pub mod decimal {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(money)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(342050);
        assert_eq!(money.cents(), 342050);
        assert_eq!(money.dollars(), 3420);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!("1250.00".parse::<Money>().unwrap().cents(), 125000);
        assert_eq!("3420.5".parse::<Money>().unwrap().cents(), 342050);
        assert_eq!("620".parse::<Money>().unwrap().cents(), 62000);
        assert_eq!("0.07".parse::<Money>().unwrap().cents(), 7);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
        assert_eq!(" 12.00 ".parse::<Money>().unwrap().cents(), 1200);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("1,250.00".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
        assert!("$10".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_grouped_string() {
        assert_eq!(Money::from_cents(187525).to_grouped_string(), "1,875.25");
        assert_eq!(Money::from_cents(62000).to_grouped_string(), "620.00");
        assert_eq!(Money::from_cents(875000).to_grouped_string(), "8,750.00");
        assert_eq!(Money::from_cents(100000000).to_grouped_string(), "1,000,000.00");
        assert_eq!(Money::from_cents(5).to_grouped_string(), "0.05");
        assert_eq!(Money::zero().to_grouped_string(), "0.00");
        assert_eq!(Money::from_cents(-99999).to_grouped_string(), "-999.99");
    }

    #[test]
    fn test_display_matches_parse_input() {
        let money: Money = "3420.50".parse().unwrap();
        assert_eq!(money.to_string(), "3420.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_ordering_is_numeric() {
        let small: Money = "620.00".parse().unwrap();
        let large: Money = "8750.00".parse().unwrap();
        let mid: Money = "890".parse().unwrap();
        assert!(small < mid);
        assert!(mid < large);
    }
}
