//! # View Model
//!
//! Pure projection from records + view state to what the table shows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  &[Invoice] + ViewState                                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  run_pipeline (filter → sort)                                           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  InvoiceRow per record (formatted strings, badge label/class)          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  TableView { rows, count_label, is_empty, state }                      │
//! │                                                                         │
//! │  The host adapter writes a TableView to its rendering surface.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::{count_label, format_amount, format_date};
use crate::pipeline::run_pipeline;
use crate::types::{Invoice, InvoiceStatus};
use crate::view_state::ViewState;

/// One displayed row. Every field is ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub id: String,
    pub customer: String,
    /// Grouped, two decimals, no symbol (`"1,875.25"`).
    pub amount: String,
    pub status: InvoiceStatus,
    pub status_label: String,
    pub badge_class: String,
    /// `Mon D, YYYY`
    pub due_date: String,
    /// `Mon D, YYYY`
    pub issued_at: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        InvoiceRow {
            id: invoice.id.clone(),
            customer: invoice.customer.clone(),
            amount: format_amount(invoice.amount),
            status: invoice.status,
            status_label: invoice.status.label().to_string(),
            badge_class: invoice.status.badge_class().to_string(),
            due_date: format_date(invoice.due_date),
            issued_at: format_date(invoice.issued_at),
        }
    }
}

/// Everything one render needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub rows: Vec<InvoiceRow>,
    /// `"<n> invoices"`
    pub count_label: String,
    /// When true the empty-state view is shown and the table hidden.
    pub is_empty: bool,
    /// The state this view was projected from (drives control marks).
    pub state: ViewState,
}

impl TableView {
    #[inline]
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Projects the dataset through `state` into a [`TableView`].
///
/// ## Example
/// ```rust
/// use invoice_core::dataset::load_invoices;
/// use invoice_core::view::project_table;
/// use invoice_core::{StatusFilter, ViewState};
///
/// let invoices = load_invoices().unwrap();
/// let view = project_table(&invoices, &ViewState::with_filter(StatusFilter::Overdue));
/// assert_eq!(view.count_label, "3 invoices");
/// assert!(!view.is_empty);
/// ```
pub fn project_table(invoices: &[Invoice], state: &ViewState) -> TableView {
    let rows: Vec<InvoiceRow> = run_pipeline(invoices, state)
        .into_iter()
        .map(InvoiceRow::from)
        .collect();

    TableView {
        count_label: count_label(rows.len()),
        is_empty: rows.is_empty(),
        rows,
        state: *state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_invoices;
    use crate::types::{SortColumn, StatusFilter};

    #[test]
    fn test_row_formatting() {
        let invoices = load_invoices().unwrap();
        let row = InvoiceRow::from(&invoices[7]);
        assert_eq!(row.id, "inv_008");
        assert_eq!(row.customer, "Globex Inc");
        assert_eq!(row.amount, "1,875.25");
        assert_eq!(row.status_label, "PENDING");
        assert_eq!(row.badge_class, "status-glass status-pending-glass");
        assert_eq!(row.due_date, "Feb 1, 2025");
        assert_eq!(row.issued_at, "Jan 18, 2025");
    }

    #[test]
    fn test_default_view_shows_everything() {
        let invoices = load_invoices().unwrap();
        let view = project_table(&invoices, &ViewState::new());
        assert_eq!(view.count(), 10);
        assert_eq!(view.count_label, "10 invoices");
        assert!(!view.is_empty);
        assert_eq!(view.rows[0].id, "inv_001");
    }

    #[test]
    fn test_empty_projection() {
        let invoices: Vec<Invoice> = load_invoices()
            .unwrap()
            .into_iter()
            .filter(|i| i.status != InvoiceStatus::Pending)
            .collect();

        let view = project_table(&invoices, &ViewState::with_filter(StatusFilter::Pending));
        assert!(view.rows.is_empty());
        assert!(view.is_empty);
        assert_eq!(view.count_label, "0 invoices");
    }

    #[test]
    fn test_view_carries_state() {
        let invoices = load_invoices().unwrap();
        let mut state = ViewState::new();
        state.toggle_sort(SortColumn::Amount);
        let view = project_table(&invoices, &state);
        assert_eq!(view.state, state);
        assert_eq!(view.rows[0].amount, "620.00");
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let invoices = load_invoices().unwrap();
        let view = project_table(&invoices, &ViewState::with_filter(StatusFilter::Paid));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["countLabel"], "4 invoices");
        assert_eq!(json["isEmpty"], false);
        assert_eq!(json["rows"][0]["statusLabel"], "PAID");
        assert_eq!(json["rows"][0]["dueDate"], "Jan 15, 2025");
        assert_eq!(json["state"]["filter"], "paid");
        assert!(json["state"]["sort"].is_null());
    }
}
