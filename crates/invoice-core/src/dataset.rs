//! # Dataset
//!
//! The fixed set of invoices the board displays.
//!
//! The records ship inside the binary (`include_str!`), so "loading" them is
//! a pure JSON decode. The set never changes for the lifetime of the process.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Invoice;

const INVOICES_JSON: &str = include_str!("../data/invoices.json");

/// Decodes the embedded dataset.
///
/// ## Example
/// ```rust
/// use invoice_core::dataset::load_invoices;
///
/// let invoices = load_invoices().unwrap();
/// assert_eq!(invoices.len(), 10);
/// assert_eq!(invoices[0].id, "inv_001");
/// ```
pub fn load_invoices() -> CoreResult<Vec<Invoice>> {
    parse_invoices(INVOICES_JSON)
}

/// Decodes a JSON array of invoice records and checks that ids are unique.
pub fn parse_invoices(json: &str) -> CoreResult<Vec<Invoice>> {
    let invoices: Vec<Invoice> =
        serde_json::from_str(json).map_err(|e| CoreError::Dataset(e.to_string()))?;

    let mut seen = HashSet::with_capacity(invoices.len());
    for invoice in &invoices {
        if !seen.insert(invoice.id.as_str()) {
            return Err(CoreError::Dataset(format!(
                "duplicate invoice id: {}",
                invoice.id
            )));
        }
    }

    Ok(invoices)
}
