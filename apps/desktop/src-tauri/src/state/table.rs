//! # Table State
//!
//! Owns the dataset and the single `ViewState` the board renders from.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Table State Operations                               │
//! │                                                                         │
//! │  Page Action              Command                 View State Change     │
//! │  ───────────              ───────                 ─────────────────     │
//! │                                                                         │
//! │  Page ready ─────────────► get_table() ─────────► (read only)          │
//! │                                                                         │
//! │  Click filter button ────► set_filter() ────────► filter = status      │
//! │                                                                         │
//! │  Click column header ────► toggle_sort() ───────► asc → desc → none    │
//! │                                                                         │
//! │  Every command returns the freshly projected TableView.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use invoice_core::view::project_table;
use invoice_core::{Invoice, SortColumn, SortSpec, StatusFilter, TableView, ViewState};

/// Tauri-managed table state.
///
/// The dataset is immutable after construction, so only the view state sits
/// behind the `Mutex`. Each command holds the lock for one mutate-and-project
/// step, which keeps the single-writer ordering of clicks.
#[derive(Debug)]
pub struct TableState {
    invoices: Vec<Invoice>,
    view: Mutex<ViewState>,
}

impl TableState {
    /// Creates the state with an initial view.
    pub fn new(invoices: Vec<Invoice>, initial: ViewState) -> Self {
        TableState {
            invoices,
            view: Mutex::new(initial),
        }
    }

    /// The dataset, in original order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Returns a copy of the current view state.
    pub fn view_state(&self) -> ViewState {
        *self.view.lock().expect("View state mutex poisoned")
    }

    /// Projects the current view state.
    pub fn project(&self) -> TableView {
        let view = self.view.lock().expect("View state mutex poisoned");
        project_table(&self.invoices, &view)
    }

    /// Executes a function with write access to the view state, then
    /// projects the result under the same lock.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let (sort, view) = table.update(|v| v.toggle_sort(SortColumn::Amount));
    /// ```
    pub fn update<F, R>(&self, f: F) -> (R, TableView)
    where
        F: FnOnce(&mut ViewState) -> R,
    {
        let mut view = self.view.lock().expect("View state mutex poisoned");
        let result = f(&mut view);
        (result, project_table(&self.invoices, &view))
    }

    /// Makes `filter` active and re-projects.
    pub fn set_filter(&self, filter: StatusFilter) -> TableView {
        self.update(|v| v.set_filter(filter)).1
    }

    /// Advances the sort cycle for `column` and re-projects.
    pub fn toggle_sort(&self, column: SortColumn) -> (Option<SortSpec>, TableView) {
        self.update(|v| v.toggle_sort(column))
    }
}
