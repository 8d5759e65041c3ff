use tracing::{error, info};

/// Closes a SeaORM connection pool, logging the outcome.
pub async fn close_database(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("Database connection '{}' closed successfully", name),
        Err(e) => error!("Error closing database connection '{}': {}", name, e),
    }
}
