use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use strum::Display;
use thiserror::Error;

/// Store operation that failed; its display form is the client-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreOperation {
    #[strum(serialize = "insert failed")]
    Insert,
    #[strum(serialize = "query failed")]
    Query,
    #[strum(serialize = "update failed")]
    Update,
    #[strum(serialize = "delete failed")]
    Delete,
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{operation}: {detail}")]
    Store {
        operation: StoreOperation,
        detail: String,
    },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("users-api request failed: {0}")]
    Upstream(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn not_found() -> Self {
        ProductError::NotFound("product not found".to_string())
    }

    pub fn store(operation: StoreOperation, err: impl std::fmt::Display) -> Self {
        ProductError::Store {
            operation,
            detail: err.to_string(),
        }
    }

    /// Underlying failure text, if the error carries one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ProductError::Store { detail, .. } => Some(detail),
            ProductError::StoreUnavailable(detail) | ProductError::Upstream(detail) => {
                Some(detail)
            }
            _ => None,
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::InvalidId(id) => AppError::InvalidId(id),
            ProductError::NotFound(msg) => AppError::NotFound(msg),
            ProductError::Store { operation, detail } => AppError::Internal {
                code: ErrorCode::StoreError,
                message: operation.to_string(),
                detail: Some(detail),
            },
            ProductError::StoreUnavailable(detail) => AppError::Internal {
                code: ErrorCode::StoreUnavailable,
                message: ErrorCode::StoreUnavailable.default_message().to_string(),
                detail: Some(detail),
            },
            ProductError::Upstream(detail) => AppError::BadGateway {
                message: "users-api request failed".to_string(),
                detail: Some(detail),
            },
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_store_operation_messages() {
        assert_eq!(StoreOperation::Insert.to_string(), "insert failed");
        assert_eq!(StoreOperation::Query.to_string(), "query failed");
        assert_eq!(StoreOperation::Update.to_string(), "update failed");
        assert_eq!(StoreOperation::Delete.to_string(), "delete failed");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ProductError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ProductError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (ProductError::not_found(), StatusCode::NOT_FOUND),
            (
                ProductError::store(StoreOperation::Insert, "boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ProductError::StoreUnavailable("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ProductError::Upstream("refused".into()), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_store_error_keeps_operation_message() {
        match AppError::from(ProductError::store(StoreOperation::Update, "timed out")) {
            AppError::Internal {
                code,
                message,
                detail,
            } => {
                assert_eq!(code, ErrorCode::StoreError);
                assert_eq!(message, "update failed");
                assert_eq!(detail.as_deref(), Some("timed out"));
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_detail() {
        assert_eq!(ProductError::Upstream("refused".into()).detail(), Some("refused"));
        assert_eq!(ProductError::not_found().detail(), None);
    }
}
