use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use super::{ErrorCode, ErrorResponse};

/// Fallback for unmatched routes, so unknown paths still get a JSON body.
pub async fn not_found(uri: Uri) -> Response {
    let body = Json(
        ErrorResponse::new(ErrorCode::NotFound, "route not found")
            .with_detail(Some(format!("no route for {}", uri.path()))),
    );

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    let body = Json(
        ErrorResponse::new(
            ErrorCode::MethodNotAllowed,
            ErrorCode::MethodNotAllowed.default_message(),
        )
        .with_detail(Some(format!("{} is not supported on {}", method, uri.path()))),
    );

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
