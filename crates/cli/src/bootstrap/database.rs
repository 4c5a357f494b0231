use keystone_infrastructure::database::Database;
use tracing::{error, info};

/// Connects and migrates. Failure here aborts startup.
pub async fn init_database(database: &Database) -> anyhow::Result<()> {
    info!("Initializing database");

    database.start().await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");
    Ok(())
}

pub async fn shutdown_database(database: &Database) {
    database.stop().await;
}
