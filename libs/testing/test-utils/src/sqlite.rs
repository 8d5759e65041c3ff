//! In-memory SQLite test database.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Test database with the workspace migrations applied.
///
/// [`TestDatabase::sqlite`] needs nothing but the process and is what most tests
/// use. With the `postgres` feature, `TestDatabase::new` starts a real Postgres
/// container instead; the container is removed when the value is dropped.
pub struct TestDatabase {
    #[cfg(feature = "postgres")]
    #[allow(dead_code)]
    pub(crate) container:
        Option<testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>>,
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Fresh in-memory database, private to the caller.
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::sqlite().await;
    /// let conn = db.connection();
    /// # }
    /// ```
    pub async fn sqlite() -> Self {
        let connection_string = "sqlite::memory:".to_string();

        // A second pooled connection would open a second, empty database.
        let mut options = ConnectOptions::new(connection_string.clone());
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to open in-memory SQLite");

        Migrator::up(&connection, None)
            .await
            .expect("Failed to run migrations");

        tracing::debug!("Test database ready (SQLite in-memory)");

        Self {
            #[cfg(feature = "postgres")]
            container: None,
            connection,
            connection_string,
        }
    }

    /// Get a cloned connection (useful for passing to repositories)
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}
