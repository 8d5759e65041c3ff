use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Pings the pool. Used by the `/ready` probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running database health check");

    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    #[tokio::test]
    async fn test_in_memory_database_is_healthy() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_closed_pool_is_unhealthy() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let probe = db.clone();
        db.close().await.unwrap();

        let err = check_health(&probe).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
    }
}
