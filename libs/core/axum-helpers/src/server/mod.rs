//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation, tracing and CORS
//! - The store-independent `/health` endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes.merge(health_router(app_info!("products-api"))));
//! create_production_app(app, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_then_cleanup, OPENAPI_JSON_PATH};
pub use health::{health_handler, health_router, HealthResponse};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
