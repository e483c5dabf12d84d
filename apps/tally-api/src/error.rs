//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! Handler → Result<T, ApiError>
//!
//!   CoreError::InvalidReceipt     ──► 400 {"error": "The receipt is invalid."}
//!   CoreError::InvalidIdentifier  ──► 400 {"error": "The receipt id is invalid."}
//!   no stored receipt             ──► 404 {"error": "No receipt found for that ID."}
//!   StoreError                    ──► 500 {"error": "Internal server error."}
//! ```
//!
//! Field-level validation detail is logged, never returned to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tally_core::CoreError;
use tally_store::StoreError;
use tracing::{error, warn};

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const INVALID_ID_MESSAGE: &str = "The receipt id is invalid.";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";
pub const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload failed receipt validation (or was not JSON at all).
    #[error("{0}")]
    InvalidReceipt(String),

    /// Path id is not a canonical UUID v4.
    #[error("{0}")]
    InvalidIdentifierFormat(String),

    /// Well-formed id with no stored receipt.
    #[error("Receipt not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt(_) | ApiError::InvalidIdentifierFormat(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Never includes field detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidReceipt(_) => INVALID_RECEIPT_MESSAGE,
            ApiError::InvalidIdentifierFormat(_) => INVALID_ID_MESSAGE,
            ApiError::NotFound(_) => NOT_FOUND_MESSAGE,
            ApiError::Internal(_) => INTERNAL_MESSAGE,
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidReceipt(detail) => {
                warn!(field = detail.field(), reason = %detail, "Receipt rejected");
                ApiError::InvalidReceipt(detail.to_string())
            }
            CoreError::InvalidIdentifier(detail) => {
                warn!(reason = %detail, "Receipt id rejected");
                ApiError::InvalidIdentifierFormat(detail.to_string())
            }
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!("Receipt store failed: {}", err);
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ValidationError;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidReceipt("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidIdentifierFormat("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_detail_is_not_public() {
        let err: ApiError = CoreError::InvalidReceipt(ValidationError::Required {
            field: "total".to_string(),
        })
        .into();
        assert!(matches!(&err, ApiError::InvalidReceipt(detail) if detail == "total is required"));
        assert_eq!(err.public_message(), INVALID_RECEIPT_MESSAGE);
    }

    #[test]
    fn test_store_errors_are_internal() {
        let err: ApiError = StoreError::Duplicate(Uuid::nil()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);
    }
}
