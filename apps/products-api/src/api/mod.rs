//! API routes module

pub mod products;

use axum::Router;
use domain_products::HttpUsersClient;

use crate::config::UsersApiConfig;
use crate::state::StoreHandle;

/// Create all API routes
pub fn routes(store: &StoreHandle, users_api: &UsersApiConfig) -> eyre::Result<Router> {
    let users = HttpUsersClient::new(&users_api.base_url, users_api.timeout)?;
    Ok(products::router(store, users))
}
