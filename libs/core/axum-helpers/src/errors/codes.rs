//! Type-safe error codes for API responses.
//!
//! Each code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Generic malformed request
    BadRequest,

    /// Required fields missing or out of range
    ValidationError,

    /// Identifier in the path is not well-formed for the backing store
    InvalidId,

    /// Request body is not valid JSON for the target type
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Path exists but does not accept the request method
    MethodNotAllowed,

    /// Request body exceeds the configured limit
    PayloadTooLarge,

    // Server errors (2000-2999)
    /// An unexpected internal server error occurred
    InternalError,

    /// A store read or write failed
    StoreError,

    /// The store did not answer a liveness query
    StoreUnavailable,

    // Dependency errors (3000-3999)
    /// A companion service call failed
    UpstreamError,
}

impl ErrorCode {
    /// Machine-readable identifier sent to clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::StoreError => "STORE_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::UpstreamError => "UPSTREAM_ERROR",
        }
    }

    /// Integer code for logs and dashboards
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::PayloadTooLarge => 1006,
            Self::InternalError => 2000,
            Self::StoreError => 2001,
            Self::StoreUnavailable => 2002,
            Self::UpstreamError => 3001,
        }
    }

    /// Message used when the caller does not supply one
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::ValidationError => "request validation failed",
            Self::InvalidId => "invalid id format",
            Self::InvalidJson => "invalid JSON body",
            Self::NotFound => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::PayloadTooLarge => "request body too large",
            Self::InternalError => "internal server error",
            Self::StoreError => "store operation failed",
            Self::StoreUnavailable => "store unavailable",
            Self::UpstreamError => "upstream service request failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
