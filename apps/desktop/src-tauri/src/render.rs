//! # Render Adapter
//!
//! Writes a `TableView` into the shape the page applies verbatim.
//!
//! ## Render Target
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #totalCount     ◄── count_text            "3 invoices"                │
//! │  .filter-btn     ◄── active_filter         one button gets "active"    │
//! │  th[data-column] ◄── headers[].class       sort-asc / sort-desc / none │
//! │  #invoiceTable   ◄── table_hidden                                      │
//! │  #emptyState     ◄── empty_hidden                                      │
//! │  #tableBody      ◄── body_html             innerHTML, fully replaced   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No diffing: every patch carries the whole body.

use std::fmt::Write;

use invoice_core::{InvoiceRow, SortColumn, StatusFilter, TableView};
use serde::Serialize;

use crate::state::ConfigState;

/// Sort mark for one column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMark {
    pub column: SortColumn,
    /// `sort-asc`, `sort-desc`, or `None` to clear both.
    pub class: Option<&'static str>,
}

/// Everything the page script needs to update the DOM after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPatch {
    pub body_html: String,
    pub table_hidden: bool,
    pub empty_hidden: bool,
    pub count_text: String,
    pub active_filter: StatusFilter,
    pub headers: Vec<HeaderMark>,
}

impl RenderPatch {
    /// Builds the patch for `view`.
    pub fn from_view(view: &TableView, config: &ConfigState) -> Self {
        let headers = SortColumn::ALL
            .into_iter()
            .map(|column| HeaderMark {
                column,
                class: view.state.header_class(column),
            })
            .collect();

        let body_html = if view.is_empty {
            String::new()
        } else {
            render_rows(&view.rows, &config.currency_symbol)
        };

        RenderPatch {
            body_html,
            table_hidden: view.is_empty,
            empty_hidden: !view.is_empty,
            count_text: view.count_label.clone(),
            active_filter: view.state.filter(),
            headers,
        }
    }
}

/// Renders the `<tr>` markup for the table body.
pub fn render_rows(rows: &[InvoiceRow], currency_symbol: &str) -> String {
    let mut html = String::with_capacity(rows.len() * 640);
    for row in rows {
        render_row(&mut html, row, currency_symbol);
    }
    html
}

fn render_row(out: &mut String, row: &InvoiceRow, currency_symbol: &str) {
    // Writing into a String cannot fail
    let _ = write!(
        out,
        concat!(
            r#"<tr class="glass-row border-b border-gray-100/50">"#,
            r#"<td class="px-5 py-4 customer-cell">{customer}</td>"#,
            r#"<td class="px-5 py-4 text-right amount-cell w-40"><span class="currency-symbol">{symbol}</span>{amount}</td>"#,
            r#"<td class="px-5 py-4 w-48"><span class="{badge}">{label}</span></td>"#,
            r#"<td class="px-5 py-4 text-[#6b7280]">{due}</td>"#,
            r#"<td class="px-5 py-4 text-[#6b7280]">{issued}</td>"#,
            r#"<td class="px-5 py-4 text-[#374151]">{id}</td>"#,
            "</tr>"
        ),
        customer = escape_html(&row.customer),
        symbol = escape_html(currency_symbol),
        amount = escape_html(&row.amount),
        badge = escape_html(&row.badge_class),
        label = escape_html(&row.status_label),
        due = escape_html(&row.due_date),
        issued = escape_html(&row.issued_at),
        id = escape_html(&row.id),
    );
}

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
