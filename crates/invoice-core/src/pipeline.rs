//! # Data Pipeline
//!
//! Pure `filter → sort` stages applied to the dataset on every render.
//!
//! ```text
//! &[Invoice] ──► filter_invoices(filter) ──► sort_invoices(sort) ──► Vec<&Invoice>
//! ```
//!
//! Both stages borrow the records; nothing is cloned until the view
//! projection formats them.

use crate::types::{Invoice, SortSpec, StatusFilter};
use crate::view_state::ViewState;

/// Returns the invoices that pass `filter`, in their original order.
///
/// `StatusFilter::All` returns every record.
///
/// ## Example
/// ```rust
/// use invoice_core::dataset::load_invoices;
/// use invoice_core::pipeline::filter_invoices;
/// use invoice_core::StatusFilter;
///
/// let invoices = load_invoices().unwrap();
/// let overdue = filter_invoices(&invoices, StatusFilter::Overdue);
/// let ids: Vec<&str> = overdue.iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(ids, ["inv_002", "inv_006", "inv_010"]);
/// ```
pub fn filter_invoices(invoices: &[Invoice], filter: StatusFilter) -> Vec<&Invoice> {
    invoices.iter().filter(|inv| filter.matches(inv)).collect()
}

/// Orders `invoices` by `sort`. `None` returns the input order untouched.
///
/// The sort is stable, so records with equal keys keep their relative order
/// in both directions.
pub fn sort_invoices<'a>(mut invoices: Vec<&'a Invoice>, sort: Option<SortSpec>) -> Vec<&'a Invoice> {
    if let Some(spec) = sort {
        invoices.sort_by(|a, b| spec.compare(a, b));
    }
    invoices
}

/// Runs the whole pipeline for the given view state.
pub fn run_pipeline<'a>(invoices: &'a [Invoice], state: &ViewState) -> Vec<&'a Invoice> {
    sort_invoices(filter_invoices(invoices, state.filter()), state.sort())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_invoices;
    use crate::types::{InvoiceStatus, SortColumn};

    fn ids<'a>(invoices: &[&'a Invoice]) -> Vec<&'a str> {
        invoices.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_filter_all_is_identity() {
        let invoices = load_invoices().unwrap();
        let all = filter_invoices(&invoices, StatusFilter::All);
        assert_eq!(all.len(), invoices.len());
        for (kept, original) in all.iter().zip(&invoices) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_filter_keeps_only_matching_status() {
        let invoices = load_invoices().unwrap();
        for status in InvoiceStatus::ALL {
            let subset = filter_invoices(&invoices, status.into());
            assert!(!subset.is_empty());
            assert!(subset.iter().all(|i| i.status == status));
        }
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let invoices = load_invoices().unwrap();
        let paid = filter_invoices(&invoices, StatusFilter::Paid);
        assert_eq!(ids(&paid), ["inv_001", "inv_004", "inv_007", "inv_009"]);
    }

    #[test]
    fn test_sort_none_is_identity() {
        let invoices = load_invoices().unwrap();
        let input = filter_invoices(&invoices, StatusFilter::All);
        let expected = ids(&input);
        let sorted = sort_invoices(input, None);
        assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn test_sort_customer_ties_keep_original_order() {
        let invoices = load_invoices().unwrap();
        let all = filter_invoices(&invoices, StatusFilter::All);

        let asc = sort_invoices(all.clone(), Some(SortSpec::asc(SortColumn::Customer)));
        assert_eq!(
            ids(&asc),
            [
                "inv_001", "inv_005", // Acme Corp
                "inv_002", "inv_008", // Globex Inc
                "inv_003", "inv_009", // Initech
                "inv_006", // Stark Industries
                "inv_004", "inv_010", // Umbrella LLC
                "inv_007", // Wayne Enterprises
            ]
        );

        let desc = sort_invoices(all, Some(SortSpec::desc(SortColumn::Customer)));
        assert_eq!(
            ids(&desc),
            [
                "inv_007", "inv_004", "inv_010", "inv_006", "inv_003", "inv_009", "inv_002",
                "inv_008", "inv_001", "inv_005",
            ]
        );
    }

    #[test]
    fn test_sort_status_lexicographic_on_tag() {
        let invoices = load_invoices().unwrap();
        let sorted = sort_invoices(
            filter_invoices(&invoices, StatusFilter::All),
            Some(SortSpec::asc(SortColumn::Status)),
        );
        let statuses: Vec<&str> = sorted.iter().map(|i| i.status.as_str()).collect();
        assert_eq!(
            statuses,
            [
                "overdue", "overdue", "overdue", "paid", "paid", "paid", "paid", "pending",
                "pending", "pending",
            ]
        );
    }

    #[test]
    fn test_sort_issued_at_chronological() {
        let invoices = load_invoices().unwrap();
        let sorted = sort_invoices(
            filter_invoices(&invoices, StatusFilter::All),
            Some(SortSpec::asc(SortColumn::IssuedAt)),
        );
        assert_eq!(sorted.first().unwrap().id, "inv_009"); // 2024-12-18
        assert_eq!(sorted.last().unwrap().id, "inv_008"); // 2025-01-18
    }

    #[test]
    fn test_run_pipeline_pending_due_date_desc() {
        let invoices = load_invoices().unwrap();
        let mut state = ViewState::new();
        state.set_filter(StatusFilter::Pending);
        state.toggle_sort(SortColumn::DueDate);
        state.toggle_sort(SortColumn::DueDate);

        let rows = run_pipeline(&invoices, &state);
        assert_eq!(ids(&rows), ["inv_008", "inv_005", "inv_003"]);
    }
}
