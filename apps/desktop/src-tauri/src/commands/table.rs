//! # Table Commands
//!
//! Commands behind the filter buttons and sortable headers.
//!
//! ## Interaction Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Interaction Cycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────────┐     ┌─────────────┐     ┌────────┐  │
//! │  │  Click   │────►│ Mutate view  │────►│  Project    │────►│ Apply  │  │
//! │  │          │     │    state     │     │  TableView  │     │ patch  │  │
//! │  └──────────┘     └──────────────┘     └─────────────┘     └────────┘  │
//! │                                                                         │
//! │  set_filter   : filter = tag                                            │
//! │  toggle_sort  : asc → desc → none (per column)                          │
//! │  get_table    : no mutation (startup render)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These are plain functions over the state types; `commands::ipc` wraps them
//! for the Tauri window.

use invoice_core::{SortColumn, StatusFilter};
use tracing::debug;

use crate::error::ApiError;
use crate::render::RenderPatch;
use crate::state::{ConfigState, TableState};

/// Renders the current view without changing it.
///
/// Called once by the startup hook for the first render.
pub fn get_table(table: &TableState, config: &ConfigState) -> RenderPatch {
    debug!("get_table command");
    RenderPatch::from_view(&table.project(), config)
}

/// Makes the filter tagged `status` active.
///
/// ## Arguments
/// * `status` - `all`, `paid`, `pending` or `overdue` (the button's `data-status`)
///
/// ## Returns
/// Patch for the re-rendered table
pub fn set_filter(
    table: &TableState,
    config: &ConfigState,
    status: &str,
) -> Result<RenderPatch, ApiError> {
    let filter: StatusFilter = status.parse()?;
    debug!(filter = %filter, "set_filter command");

    let view = table.set_filter(filter);
    Ok(RenderPatch::from_view(&view, config))
}

/// Advances the sort cycle for the header tagged `column`.
///
/// ## Arguments
/// * `column` - the header's `data-column` (`customer`, `dueDate`, ...)
///
/// ## Returns
/// Patch for the re-rendered table, including the new header marks
pub fn toggle_sort(
    table: &TableState,
    config: &ConfigState,
    column: &str,
) -> Result<RenderPatch, ApiError> {
    let column: SortColumn = column.parse()?;

    let (sort, view) = table.toggle_sort(column);
    debug!(column = %column, sort = ?sort, "toggle_sort command");

    Ok(RenderPatch::from_view(&view, config))
}
