//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product CRUD API backed by MongoDB or PostgreSQL",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4002", description = "Local development server")
    )
)]
struct ApiInfo;

/// Combined OpenAPI documentation for Products API
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ApiInfo::openapi().merge_from(domain_products::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_contains_product_paths() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Products API");
        for path in ["/products", "/products/{id}", "/products/with-users", "/db/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
