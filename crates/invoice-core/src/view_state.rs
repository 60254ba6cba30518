//! # View State
//!
//! The two pieces of transient UI state: the active filter and the active sort.
//!
//! ## Sort Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Header Click Cycle (per column)                         │
//! │                                                                         │
//! │   unsorted ──click A──► A asc ──click A──► A desc ──click A──► unsorted │
//! │                           │                  │                          │
//! │                        click B            click B                       │
//! │                           │                  │                          │
//! │                           ▼                  ▼                          │
//! │                         B asc              B asc                        │
//! │                                                                         │
//! │  The third click CLEARS the sort. It does not wrap back to ascending.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{SortColumn, SortDirection, SortSpec, StatusFilter};

/// Active filter and sort. Lives for the session; a reload resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ViewState {
    filter: StatusFilter,
    sort: Option<SortSpec>,
}

impl ViewState {
    /// Filter `all`, unsorted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unsorted, starting on the given filter.
    pub fn with_filter(filter: StatusFilter) -> Self {
        ViewState { filter, sort: None }
    }

    #[inline]
    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    #[inline]
    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Makes `filter` the active filter. The sort is left as is.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Advances the sort cycle for a header click on `column`.
    ///
    /// - different column (or unsorted): ascending on `column`
    /// - same column, ascending: descending
    /// - same column, descending: sort cleared
    ///
    /// Returns the new sort.
    ///
    /// ## Example
    /// ```rust
    /// use invoice_core::{SortColumn, SortSpec, ViewState};
    ///
    /// let mut state = ViewState::new();
    /// assert_eq!(state.toggle_sort(SortColumn::Amount), Some(SortSpec::asc(SortColumn::Amount)));
    /// assert_eq!(state.toggle_sort(SortColumn::Amount), Some(SortSpec::desc(SortColumn::Amount)));
    /// assert_eq!(state.toggle_sort(SortColumn::Amount), None);
    /// ```
    pub fn toggle_sort(&mut self, column: SortColumn) -> Option<SortSpec> {
        self.sort = match self.sort {
            Some(SortSpec {
                column: active,
                direction: SortDirection::Asc,
            }) if active == column => Some(SortSpec::desc(column)),
            Some(SortSpec {
                column: active,
                direction: SortDirection::Desc,
            }) if active == column => None,
            _ => Some(SortSpec::asc(column)),
        };
        self.sort
    }

    /// Drops the active sort.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Class the header for `column` should carry, if it is the active sort.
    pub fn header_class(&self, column: SortColumn) -> Option<&'static str> {
        self.sort
            .filter(|spec| spec.column == column)
            .map(|spec| spec.direction.header_class())
    }
}
