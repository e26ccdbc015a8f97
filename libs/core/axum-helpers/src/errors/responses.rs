//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "kind": "VALIDATION_ERROR",
        "error": "name & price required",
        "details": {
            "price": [{
                "code": "required",
                "message": "name & price required",
                "params": {}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed identifier",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "kind": "INVALID_ID",
        "error": "invalid id format",
        "detail": "'abc' is not a valid identifier"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "kind": "NOT_FOUND",
        "error": "product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Store or unexpected failure",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "kind": "STORE_ERROR",
        "error": "query failed",
        "detail": "connection reset by peer"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Companion service call failed",
    content_type = "application/json",
    example = json!({
        "code": 3001,
        "kind": "UPSTREAM_ERROR",
        "error": "users-api request failed",
        "detail": "error sending request for url (http://users-api:4001/users)"
    })
)]
pub struct BadGatewayResponse(pub ErrorResponse);
