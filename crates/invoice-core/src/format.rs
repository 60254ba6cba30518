//! # Display Formatting
//!
//! Date, amount and count text shown in the table.
//!
//! English only: month names come from a fixed abbreviation table.

use chrono::{Datelike, NaiveDate};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats a date as `Mon D, YYYY` (unpadded day).
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use invoice_core::format::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(format_date(date), "Jan 1, 2025");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    // month0() is always 0..=11
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{} {}, {:04}", month, date.day(), date.year())
}

/// Parses a `YYYY-MM-DD` literal and formats it with [`format_date`].
///
/// The literal is read as a calendar date, so no time zone can shift it
/// onto the previous day.
pub fn format_date_str(value: &str) -> CoreResult<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| CoreError::InvalidDate {
        value: value.to_string(),
    })?;
    Ok(format_date(date))
}

/// Formats an amount with thousands separators and two decimals (`1,875.25`).
#[inline]
pub fn format_amount(amount: Money) -> String {
    amount.to_grouped_string()
}

/// Summary text for the visible row count. Always plural: `"1 invoices"`.
pub fn count_label(count: usize) -> String {
    format!("{} invoices", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2025-01-01").unwrap(), "Jan 1, 2025");
        assert_eq!(format_date_str("2024-12-18").unwrap(), "Dec 18, 2024");
        assert_eq!(format_date_str("2025-02-01").unwrap(), "Feb 1, 2025");
    }

    #[test]
    fn test_format_date_every_month() {
        let formatted: Vec<String> = (1..=12)
            .map(|m| format_date(NaiveDate::from_ymd_opt(2025, m, 9).unwrap()))
            .collect();
        assert_eq!(formatted[0], "Jan 9, 2025");
        assert_eq!(formatted[4], "May 9, 2025");
        assert_eq!(formatted[8], "Sep 9, 2025");
        assert_eq!(formatted[11], "Dec 9, 2025");
    }

    #[test]
    fn test_format_date_str_rejects_bad_literals() {
        assert_eq!(
            format_date_str("2025-13-01"),
            Err(CoreError::InvalidDate {
                value: "2025-13-01".to_string()
            })
        );
        assert!(format_date_str("01/15/2025").is_err());
        assert!(format_date_str("").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Money::from_cents(187525)), "1,875.25");
        assert_eq!(format_amount(Money::from_cents(62000)), "620.00");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(3), "3 invoices");
        assert_eq!(count_label(1), "1 invoices");
        assert_eq!(count_label(0), "0 invoices");
    }
}
