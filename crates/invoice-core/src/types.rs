//! # Domain Types
//!
//! Core domain types used throughout Invoice Board.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Invoice      │   │  InvoiceStatus  │   │  StatusFilter   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Paid           │   │  All            │       │
//! │  │  customer       │   │  Pending        │   │  Paid           │       │
//! │  │  amount (Money) │   │  Overdue        │   │  Pending        │       │
//! │  │  status         │   └─────────────────┘   │  Overdue        │       │
//! │  │  due_date       │                         └─────────────────┘       │
//! │  │  issued_at      │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │   SortColumn    │   │  SortDirection  │       │
//! │                        │  customer, id,  │   │  Asc / Desc     │       │
//! │                        │  amount, status,│   └─────────────────┘       │
//! │                        │  dueDate,       │                              │
//! │                        │  issuedAt       │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control Tags
//! The page tags its filter buttons and column headers with the same strings
//! these enums serialize to (`"overdue"`, `"dueDate"`, ...). `FromStr` parses
//! those tags; `as_str` produces them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Invoice Status
// =============================================================================

/// The payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    /// Every status, in the order the filter controls list them.
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Overdue,
    ];

    /// Returns the tag string (`"paid"`, `"pending"`, `"overdue"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Returns the badge label text.
    pub const fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Pending => "PENDING",
            InvoiceStatus::Overdue => "OVERDUE",
        }
    }

    /// Returns the badge style classes.
    pub const fn badge_class(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "status-glass status-paid-glass",
            InvoiceStatus::Pending => "status-glass status-pending-glass",
            InvoiceStatus::Overdue => "status-glass status-overdue-glass",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// One invoice record. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Business identifier, unique within the dataset (`inv_001`).
    pub id: String,

    pub customer: String,

    /// Stored as a decimal string in the dataset, parsed exactly.
    #[serde(with = "crate::money::decimal")]
    pub amount: Money,

    pub status: InvoiceStatus,

    /// `YYYY-MM-DD` in the dataset.
    pub due_date: NaiveDate,

    /// `YYYY-MM-DD` in the dataset.
    pub issued_at: NaiveDate,
}

// =============================================================================
// Status Filter
// =============================================================================

/// The active status filter. `All` passes every record through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Pending,
    Overdue,
}

impl StatusFilter {
    /// Every filter, in control order.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Paid,
        StatusFilter::Pending,
        StatusFilter::Overdue,
    ];

    /// Returns the status this filter selects, or `None` for `All`.
    pub const fn status(&self) -> Option<InvoiceStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Paid => Some(InvoiceStatus::Paid),
            StatusFilter::Pending => Some(InvoiceStatus::Pending),
            StatusFilter::Overdue => Some(InvoiceStatus::Overdue),
        }
    }

    /// Returns whether `invoice` passes this filter.
    pub fn matches(&self, invoice: &Invoice) -> bool {
        match self.status() {
            None => true,
            Some(status) => invoice.status == status,
        }
    }

    /// Returns the control tag (`"all"`, `"paid"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Paid => "paid",
            StatusFilter::Pending => "pending",
            StatusFilter::Overdue => "overdue",
        }
    }
}

impl From<InvoiceStatus> for StatusFilter {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Paid => StatusFilter::Paid,
            InvoiceStatus::Pending => StatusFilter::Pending,
            InvoiceStatus::Overdue => StatusFilter::Overdue,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<InvoiceStatus>().map(StatusFilter::from)
    }
}

// =============================================================================
// Sort Column
// =============================================================================

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Customer,
    Amount,
    Status,
    DueDate,
    IssuedAt,
    Id,
}

impl SortColumn {
    /// Every column, in table header order.
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Customer,
        SortColumn::Amount,
        SortColumn::Status,
        SortColumn::DueDate,
        SortColumn::IssuedAt,
        SortColumn::Id,
    ];

    /// Returns the header tag (`"customer"`, `"dueDate"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Customer => "customer",
            SortColumn::Amount => "amount",
            SortColumn::Status => "status",
            SortColumn::DueDate => "dueDate",
            SortColumn::IssuedAt => "issuedAt",
            SortColumn::Id => "id",
        }
    }

    /// Compares two invoices by this column, ascending.
    ///
    /// ## Comparison Policy
    /// - `customer`, `id`: lexicographic on the string
    /// - `status`: lexicographic on the tag string (`overdue < paid < pending`)
    /// - `amount`: numeric
    /// - `dueDate`, `issuedAt`: chronological
    pub fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        match self {
            SortColumn::Customer => a.customer.cmp(&b.customer),
            SortColumn::Amount => a.amount.cmp(&b.amount),
            SortColumn::Status => a.status.as_str().cmp(b.status.as_str()),
            SortColumn::DueDate => a.due_date.cmp(&b.due_date),
            SortColumn::IssuedAt => a.issued_at.cmp(&b.issued_at),
            SortColumn::Id => a.id.cmp(&b.id),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| CoreError::UnknownColumn(s.to_string()))
    }
}

// =============================================================================
// Sort Direction / Sort Spec
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Applies this direction to an ascending comparison result.
    /// Ties stay `Equal` in both directions.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Class the active header carries (`sort-asc` / `sort-desc`).
    pub const fn header_class(&self) -> &'static str {
        match self {
            SortDirection::Asc => "sort-asc",
            SortDirection::Desc => "sort-desc",
        }
    }
}

/// An active sort: a column and a direction.
///
/// "Unsorted" is `Option<SortSpec>::None`, so a direction without a column
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn asc(column: SortColumn) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(column: SortColumn) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Compares two invoices by this spec.
    pub fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        self.direction.apply(self.column.compare(a, b))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str, customer: &str, cents: i64, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: id.to_string(),
            customer: customer.to_string(),
            amount: Money::from_cents(cents),
            status,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            issued_at: NaiveDate::from_ymd_opt(2024, 12, 27).unwrap(),
        }
    }

    #[test]
    fn test_status_tags_round_trip_through_from_str() {
        for status in InvoiceStatus::ALL {
            assert_eq!(status.as_str().parse::<InvoiceStatus>().unwrap(), status);
        }
        assert_eq!(
            "void".parse::<InvoiceStatus>(),
            Err(CoreError::UnknownStatus("void".to_string()))
        );
    }

    #[test]
    fn test_status_display_mapping() {
        assert_eq!(InvoiceStatus::Paid.label(), "PAID");
        assert_eq!(InvoiceStatus::Overdue.label(), "OVERDUE");
        assert_eq!(
            InvoiceStatus::Pending.badge_class(),
            "status-glass status-pending-glass"
        );
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "overdue".parse::<StatusFilter>().unwrap(),
            StatusFilter::Overdue
        );
        assert!("ALL".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        let paid = invoice("inv_001", "Acme Corp", 125000, InvoiceStatus::Paid);
        assert!(StatusFilter::All.matches(&paid));
        assert!(StatusFilter::Paid.matches(&paid));
        assert!(!StatusFilter::Pending.matches(&paid));
    }

    #[test]
    fn test_column_tags() {
        assert_eq!("dueDate".parse::<SortColumn>().unwrap(), SortColumn::DueDate);
        assert_eq!("issuedAt".parse::<SortColumn>().unwrap(), SortColumn::IssuedAt);
        assert_eq!(
            "due_date".parse::<SortColumn>(),
            Err(CoreError::UnknownColumn("due_date".to_string()))
        );
    }

    #[test]
    fn test_column_serde_uses_tags() {
        let json = serde_json::to_string(&SortColumn::IssuedAt).unwrap();
        assert_eq!(json, "\"issuedAt\"");
        let filter: StatusFilter = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(filter, StatusFilter::Pending);
    }

    #[test]
    fn test_compare_status_uses_tag_string() {
        let paid = invoice("a", "A", 1, InvoiceStatus::Paid);
        let overdue = invoice("b", "B", 1, InvoiceStatus::Overdue);
        assert_eq!(SortColumn::Status.compare(&overdue, &paid), Ordering::Less);
    }

    #[test]
    fn test_descending_keeps_ties_equal() {
        let a = invoice("a", "Initech", 1, InvoiceStatus::Paid);
        let b = invoice("b", "Initech", 2, InvoiceStatus::Paid);
        let spec = SortSpec::desc(SortColumn::Customer);
        assert_eq!(spec.compare(&a, &b), Ordering::Equal);
        assert_eq!(SortSpec::desc(SortColumn::Amount).compare(&a, &b), Ordering::Greater);
    }
}
