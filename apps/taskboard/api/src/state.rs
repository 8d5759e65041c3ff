//! Application state management.

use core_crud::EntityRegistry;
use std::sync::Arc;

/// Shared application state.
///
/// Cloned into the readiness handler; the connection pool and registry are
/// reference counted, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Search descriptors of every served entity, built once at startup
    pub registry: Arc<EntityRegistry>,
}
