use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ProductError;

/// Client-facing message for any missing or unusable `name`/`price`
pub const REQUIRED_FIELDS_MESSAGE: &str = "name & price required";

/// Product entity as returned by the API.
///
/// `id` is opaque to clients: a 24-character hex object id for the document
/// store, a decimal integer for the relational and in-memory stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier
    #[schema(example = "665f1c2b9d3e4a0012ab34cd")]
    pub id: String,
    /// Product name
    #[schema(example = "Widget")]
    pub name: String,
    /// Unit price
    #[schema(example = 9.99)]
    pub price: f64,
}

/// Request body for `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(
        required(message = "name & price required"),
        length(min = 1, message = "name & price required")
    )]
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[validate(
        required(message = "name & price required"),
        range(exclusive_min = 0.0, message = "price must be greater than 0")
    )]
    #[schema(example = 9.99)]
    pub price: Option<f64>,
}

/// Validated name and price, ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl TryFrom<ProductInput> for NewProduct {
    type Error = ProductError;

    fn try_from(input: ProductInput) -> Result<Self, Self::Error> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ProductError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;

        let price = input
            .price
            .ok_or_else(|| ProductError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()))?;
        if !price.is_finite() || price <= 0.0 {
            return Err(ProductError::Validation(
                "price must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            price,
        })
    }
}

/// Response body for `DELETE /products/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProduct {
    pub deleted_id: String,
}

/// Response body for `GET /products/with-users`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsWithUsers {
    pub products: Vec<Product>,
    /// Length of the users-api array response, 0 if it was not an array
    pub users_count: usize,
}

/// Response body for `GET /db/health`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoreHealth {
    pub ok: bool,
    /// `mongodb`, `postgres` or `memory`
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StoreHealth {
    pub fn healthy(backend: &str, count: u64) -> Self {
        Self {
            ok: true,
            backend: backend.to_string(),
            count: Some(count),
            error: None,
            detail: None,
        }
    }

    pub fn unhealthy(backend: &str, detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            backend: backend.to_string(),
            count: None,
            error: Some("store unavailable".to_string()),
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, price: Option<f64>) -> ProductInput {
        ProductInput {
            name: name.map(String::from),
            price,
        }
    }

    #[test]
    fn test_product_input_validation() {
        assert!(input(Some("Widget"), Some(9.99)).validate().is_ok());
        assert!(input(None, Some(9.99)).validate().is_err());
        assert!(input(Some(""), Some(9.99)).validate().is_err());
        assert!(input(Some("Widget"), None).validate().is_err());
        assert!(input(Some("Widget"), Some(0.0)).validate().is_err());
        assert!(input(Some("Widget"), Some(-1.0)).validate().is_err());
    }

    #[test]
    fn test_new_product_trims_name() {
        let product = NewProduct::try_from(input(Some("  Widget "), Some(1.5))).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn test_new_product_rejects_blank_name() {
        let err = NewProduct::try_from(input(Some("   "), Some(1.5))).unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE));
    }

    #[test]
    fn test_new_product_rejects_non_positive_or_non_finite_price() {
        for price in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = NewProduct::try_from(input(Some("Widget"), Some(price))).unwrap_err();
            assert!(matches!(err, ProductError::Validation(_)), "price {price}");
        }
    }

    #[test]
    fn test_response_field_names() {
        let deleted = serde_json::to_value(DeletedProduct {
            deleted_id: "7".to_string(),
        })
        .unwrap();
        assert_eq!(deleted, serde_json::json!({"deletedId": "7"}));

        let listing = serde_json::to_value(ProductsWithUsers {
            products: vec![],
            users_count: 2,
        })
        .unwrap();
        assert_eq!(listing, serde_json::json!({"products": [], "usersCount": 2}));
    }

    #[test]
    fn test_store_health_shapes() {
        let ok = serde_json::to_value(StoreHealth::healthy("mongodb", 3)).unwrap();
        assert_eq!(ok, serde_json::json!({"ok": true, "backend": "mongodb", "count": 3}));

        let down = serde_json::to_value(StoreHealth::unhealthy("postgres", "refused")).unwrap();
        assert_eq!(down["ok"], false);
        assert_eq!(down["error"], "store unavailable");
        assert_eq!(down["detail"], "refused");
        assert!(down.get("count").is_none());
    }
}
