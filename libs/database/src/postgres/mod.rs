//! Connection management, migrations runner and health check.
//!
//! Connection URLs are passed through to SeaORM, so any backend it was built
//! with works here; production uses PostgreSQL.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    run_migrations,
};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
