//! Products API - REST server

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::StoreHandle;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(backend = %config.store.backend(), "Connecting to store");

    // A store that cannot be reached at startup aborts the process
    let store = StoreHandle::connect(&config.store).await?;

    let api_routes = api::routes(&store, &config.users_api)?.merge(health_router(config.app));
    let app = create_router::<openapi::ApiDoc>(api_routes);

    info!(
        users_api = %config.users_api.base_url,
        "Starting Products API on port {}",
        config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing store connections");
        store.close().await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
