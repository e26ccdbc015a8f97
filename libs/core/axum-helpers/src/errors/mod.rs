pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every failure is rendered with this shape, so clients never see an empty
/// body or a raw stack trace:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `kind`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `error`: Human-readable error message
/// - `detail`: Optional text of the underlying failure
/// - `details`: Optional structured details (e.g., validation field errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 2001,
///   "kind": "STORE_ERROR",
///   "error": "insert failed",
///   "detail": "connection pool timed out"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub kind: String,
    /// Human-readable error message
    pub error: String,
    /// Text of the underlying failure, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            kind: code.as_str().to_string(),
            error: error.into(),
            detail: None,
            details: None,
        }
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {message}")]
    Internal {
        code: ErrorCode,
        message: String,
        detail: Option<String>,
    },

    #[error("Bad Gateway: {message}")]
    BadGateway {
        message: String,
        detail: Option<String>,
    },
}

impl AppError {
    /// 500 with the generic internal code
    pub fn internal(message: impl Into<String>, detail: Option<String>) -> Self {
        AppError::Internal {
            code: ErrorCode::InternalError,
            message: message.into(),
            detail,
        }
    }

    /// HTTP status this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e)
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::JsonExtractorRejection(e) if status == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::info!(
                    error_code = ErrorCode::PayloadTooLarge.code(),
                    "Request body too large: {}",
                    e.body_text()
                );
                ErrorResponse::new(
                    ErrorCode::PayloadTooLarge,
                    ErrorCode::PayloadTooLarge.default_message(),
                )
                .with_detail(Some(e.body_text()))
            }
            AppError::JsonExtractorRejection(e) => {
                // Other body-shape problems, missing content type included, are plain 400s
                tracing::info!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                ErrorResponse::new(ErrorCode::InvalidJson, ErrorCode::InvalidJson.default_message())
                    .with_detail(Some(e.body_text()))
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                let message = first_validation_message(&e)
                    .unwrap_or_else(|| ErrorCode::ValidationError.default_message().to_string());
                ErrorResponse::new(ErrorCode::ValidationError, message)
                    .with_details(validation_details(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                ErrorResponse::new(ErrorCode::BadRequest, msg)
            }
            AppError::InvalidId(id) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), id = %id, "Invalid id");
                ErrorResponse::new(ErrorCode::InvalidId, ErrorCode::InvalidId.default_message())
                    .with_detail(Some(format!("'{}' is not a valid identifier", id)))
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                ErrorResponse::new(ErrorCode::NotFound, msg)
            }
            AppError::Internal {
                code,
                message,
                detail,
            } => {
                tracing::error!(
                    error_code = code.code(),
                    detail = detail.as_deref().unwrap_or_default(),
                    "Internal server error: {}",
                    message
                );
                ErrorResponse::new(code, message).with_detail(detail)
            }
            AppError::BadGateway { message, detail } => {
                tracing::warn!(
                    error_code = ErrorCode::UpstreamError.code(),
                    detail = detail.as_deref().unwrap_or_default(),
                    "Upstream failure: {}",
                    message
                );
                ErrorResponse::new(ErrorCode::UpstreamError, message).with_detail(detail)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// First custom validator message, taking fields in name order so the
/// response does not depend on hash map iteration.
fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields.into_iter().find_map(|field| {
        field_errors
            .get(field)
            .and_then(|errs| errs.iter().find_map(|err| err.message.as_ref()))
            .map(|msg| msg.to_string())
    })
}

/// Field name -> list of `{code, message, params}` objects
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let entries: Vec<serde_json::Value> = errs
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}
