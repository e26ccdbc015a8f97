//! Store connection shared by the HTTP layer

use database::postgres::DatabaseConnection;
use domain_products::PgProductRepository;
use mongodb::{Client, Database};
use tracing::info;

use crate::config::StoreConfig;

/// Open handle to the selected backing store
#[derive(Clone)]
pub enum StoreHandle {
    MongoDb { client: Client, db: Database },
    Postgres(DatabaseConnection),
}

impl StoreHandle {
    /// Connect once and verify the store answers; any failure is fatal to startup
    pub async fn connect(config: &StoreConfig) -> eyre::Result<Self> {
        match config {
            StoreConfig::MongoDb(mongo) => {
                let client = database::mongodb::connect_from_config(mongo).await?;
                let db = client.database(mongo.database());
                Ok(StoreHandle::MongoDb { client, db })
            }
            StoreConfig::Postgres(postgres) => {
                let connection = database::postgres::connect_from_config(postgres.clone()).await?;

                PgProductRepository::new(connection.clone())
                    .ensure_schema()
                    .await?;
                Ok(StoreHandle::Postgres(connection))
            }
        }
    }

    /// Release the store's connections
    pub async fn close(self) {
        match self {
            StoreHandle::MongoDb { client, .. } => {
                client.shutdown().await;
                info!("MongoDB connection closed");
            }
            StoreHandle::Postgres(connection) => {
                if let Err(e) = connection.close().await {
                    tracing::warn!("Error closing PostgreSQL pool: {}", e);
                } else {
                    info!("PostgreSQL pool closed");
                }
            }
        }
    }
}
