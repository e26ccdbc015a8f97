//! Products API routes

use axum::Router;
use domain_products::{
    handlers, HttpUsersClient, MongoProductRepository, PgProductRepository, ProductService,
};

use crate::state::StoreHandle;

/// Create products router for whichever store is connected
pub fn router(store: &StoreHandle, users: HttpUsersClient) -> Router {
    match store {
        StoreHandle::MongoDb { db, .. } => {
            let repository = MongoProductRepository::new(db);
            handlers::router(ProductService::new(repository, users))
        }
        StoreHandle::Postgres(connection) => {
            let repository = PgProductRepository::new(connection.clone());
            handlers::router(ProductService::new(repository, users))
        }
    }
}
