//! Products Domain
//!
//! CRUD over a single `products` resource, stored in MongoDB or PostgreSQL,
//! plus a listing enriched with the user count from the users-api service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐      ┌───────────────┐
//! │   Service   │ ───▶ │ UsersDirectory│  ← users-api client
//! └──────┬──────┘      └───────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / PostgreSQL / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     service::ProductService,
//!     users::HttpUsersClient,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("productsdb");
//!
//! // Create a repository and service
//! let repository = MongoProductRepository::new(&db);
//! let users = HttpUsersClient::new("http://users-api:4001", Duration::from_secs(5))?;
//! let service = ProductService::new(repository, users);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod users;

// Re-export commonly used types
pub use error::{ProductError, ProductResult, StoreOperation};
pub use handlers::ApiDoc;
pub use models::{DeletedProduct, NewProduct, Product, ProductInput, ProductsWithUsers, StoreHealth};
pub use mongodb::MongoProductRepository;
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use users::{HttpUsersClient, StaticUsersDirectory, UsersDirectory};
