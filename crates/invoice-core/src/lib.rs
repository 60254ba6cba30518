//! # invoice-core: Pure Table Logic for Invoice Board
//!
//! This crate holds the whole filter/sort/format pipeline as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Invoice Board Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Page (index.html + main.js)                  │   │
//! │  │    Filter buttons ──► Sortable headers ──► Table / Empty view  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Desktop Commands                             │   │
//! │  │    get_table, set_filter, toggle_sort, get_config               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ invoice-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌────────┐ ┌──────┐ │   │
//! │  │   │  types   │ │ pipeline │ │ view_state │ │ format │ │ view │ │   │
//! │  │   │ Invoice  │ │ filter   │ │ sort cycle │ │ dates  │ │ rows │ │   │
//! │  │   │ Status   │ │ sort     │ │            │ │ money  │ │      │ │   │
//! │  │   └──────────┘ └──────────┘ └────────────┘ └────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO LOGGING • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Invoice, statuses, filters, sort columns
//! - [`money`] - Integer-cent amounts with exact decimal parsing
//! - [`dataset`] - The embedded ten-record dataset
//! - [`pipeline`] - Filter and sort stages
//! - [`view_state`] - Active filter and the three-state sort cycle
//! - [`format`] - Date, amount and count text
//! - [`view`] - Records → view model projection
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::dataset::load_invoices;
//! use invoice_core::view::project_table;
//! use invoice_core::{SortColumn, ViewState};
//!
//! let invoices = load_invoices().unwrap();
//!
//! let mut state = ViewState::new();
//! state.toggle_sort(SortColumn::Amount);
//!
//! let view = project_table(&invoices, &state);
//! assert_eq!(view.rows.first().unwrap().id, "inv_009");
//! assert_eq!(view.rows.last().unwrap().amount, "8,750.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dataset;
pub mod error;
pub mod format;
pub mod money;
pub mod pipeline;
pub mod types;
pub mod view;
pub mod view_state;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;
pub use view::{InvoiceRow, TableView};
pub use view_state::ViewState;
