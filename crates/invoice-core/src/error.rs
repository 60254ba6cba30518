//! # Error Types
//!
//! Domain-specific error types for invoice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  invoice-core errors (this file)                                       │
//! │  └── CoreError        - Unknown control tags, bad literals, bad data   │
//! │                                                                         │
//! │  Desktop API errors (in app)                                           │
//! │  └── ApiError         - What the page script sees (serialized)         │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Page script                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty filter result is NOT an error. It is a normal display state
//! handled by the view projection.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors.
///
/// Filter and sort values normally come from controls the page renders
/// itself, so these only surface when a tag or literal is malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A status tag that is not one of `all`, `paid`, `pending`, `overdue`.
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// A column tag that is not a sortable column.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A currency literal that is not a plain decimal with at most two places.
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// A date literal that is not `YYYY-MM-DD`.
    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    /// The embedded dataset failed to decode.
    #[error("Dataset error: {0}")]
    Dataset(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
