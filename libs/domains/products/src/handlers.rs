//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadGatewayResponse, BadRequestIdResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{DeletedProduct, Product, ProductInput, ProductsWithUsers, StoreHealth};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        db_health,
        list_products,
        create_product,
        list_with_users,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, DeletedProduct, ProductsWithUsers, StoreHealth),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadGatewayResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints"),
        (name = "Health", description = "Store health")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints.
///
/// Paths are absolute; mount the router at the root.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/db/health", get(db_health))
        .route("/products", get(list_products).post(create_product))
        .route("/products/with-users", get(list_with_users))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Store health: product count, or 500 when the store cannot answer
#[utoipa::path(
    get,
    path = "/db/health",
    tag = "Health",
    responses(
        (status = 200, description = "Store reachable", body = StoreHealth),
        (status = 500, description = "Store unavailable", body = StoreHealth)
    )
)]
async fn db_health<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Response {
    let backend = service.backend();

    match service.store_health().await {
        Ok(count) => Json(StoreHealth::healthy(backend, count)).into_response(),
        Err(e) => {
            tracing::error!(backend, error = %e, "Store health check failed");
            let detail = e.detail().unwrap_or_default().to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StoreHealth::unhealthy(backend, detail)),
            )
                .into_response()
        }
    }
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products together with the number of users known to users-api
#[utoipa::path(
    get,
    path = "/products/with-users",
    tag = "Products",
    responses(
        (status = 200, description = "Products and user count", body = ProductsWithUsers),
        (status = 500, response = InternalServerErrorResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn list_with_users<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductsWithUsers>> {
    let listing = service.list_with_users_count().await?;
    Ok(Json(listing))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Replace a product's name and price
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = DeletedProduct),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<DeletedProduct>> {
    let deleted_id = service.delete_product(&id).await?;
    Ok(Json(DeletedProduct { deleted_id }))
}
