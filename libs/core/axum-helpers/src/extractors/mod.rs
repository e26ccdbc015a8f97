//! Custom extractors for Axum handlers.
//!
//! Extractors here reject with [`AppError`](crate::errors::AppError) so every
//! malformed request produces the standard JSON error body.

pub mod validated_json;

pub use validated_json::ValidatedJson;
