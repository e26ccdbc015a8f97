use mongodb::{Client, bson::doc};
use tracing::debug;

use crate::common::DatabaseError;

/// Check MongoDB health by running `ping` against `database`
///
/// `ping` needs no privileges beyond access to the target database, which
/// keeps it usable against managed deployments that forbid `listDatabases`.
pub async fn check_health(client: &Client, database: &str) -> Result<(), DatabaseError> {
    debug!(database, "Running MongoDB health check");

    client
        .database(database)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("MongoDB ping failed: {}", e)))?;

    Ok(())
}
