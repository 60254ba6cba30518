//! # API Error Type
//!
//! Unified error type for desktop commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  invoke('toggle_sort', { column: 'total' })                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "total".parse::<SortColumn>() ─── CoreError::UnknownColumn ──┐        │
//! │                                                               ▼        │
//! │                                           ApiError { VALIDATION_ERROR } │
//! │                                                               │        │
//! │  catch (e) { e.code === 'VALIDATION_ERROR' } ◄────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filter and column tags come from controls the page renders itself, so in
//! practice these only fire when the markup and the enums drift apart.

use invoice_core::CoreError;
use serde::Serialize;

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Unknown column: total"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A control tag or literal could not be parsed
    ValidationError,

    /// The embedded dataset is broken
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownStatus(_)
            | CoreError::UnknownColumn(_)
            | CoreError::InvalidAmount { .. }
            | CoreError::InvalidDate { .. } => ApiError::validation(err.to_string()),
            CoreError::Dataset(ref reason) => {
                tracing::error!("Dataset failed to load: {}", reason);
                ApiError::internal("Invoice data is unavailable")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
