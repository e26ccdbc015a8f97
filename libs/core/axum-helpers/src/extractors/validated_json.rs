//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body with serde, then runs the `validator` crate's
/// `Validate` implementation. Both failure kinds become a 400 [`AppError`].
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct NewProduct {
///     #[validate(required, length(min = 1))]
///     name: Option<String>,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<NewProduct>) -> String {
///     format!("Creating {:?}", payload.name)
/// }
///
/// let app: Router = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::post, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Input {
        #[validate(required(message = "name required"), length(min = 1, message = "name required"))]
        name: Option<String>,
    }

    async fn echo(ValidatedJson(input): ValidatedJson<Input>) -> String {
        input.name.unwrap_or_default()
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"name":"Widget"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_validation_failure_is_400() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"name":""}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let response = app()
            .oneshot(request(Some("application/json"), "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_400() {
        let response = app()
            .oneshot(request(None, r#"{"name":"Widget"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
