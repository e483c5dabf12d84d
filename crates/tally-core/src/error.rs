//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Which request-level check failed               │
//! │  └── ValidationError  - Field-level detail of the failure              │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - Store operation failures                       │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - What clients see (status + generic message)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::MoneyParseError;

// =============================================================================
// Core Error
// =============================================================================

/// Request-level failures of the core checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The submitted payload is not a well-formed receipt.
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[source] ValidationError),

    /// The identifier is not a canonical UUID v4.
    #[error("Invalid receipt id: {0}")]
    InvalidIdentifier(#[source] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// `field` is a JSON path such as `items[2].price`, for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload (or an item) is not a JSON object.
    #[error("{field} must be an object")]
    NotAnObject { field: String },

    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// Field has the wrong JSON type.
    #[error("{field} must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// Field is empty (or whitespace only where trimming applies).
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// Invalid format (e.g., invalid date, time, amount, UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Field path the error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotAnObject { field }
            | ValidationError::Required { field }
            | ValidationError::InvalidType { field, .. }
            | ValidationError::Empty { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    pub(crate) fn money(field: impl Into<String>, err: MoneyParseError) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
