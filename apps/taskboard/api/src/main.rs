use axum_helpers::server::{close_database, create_production_app, create_router_with_doc, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;
    }

    if domain_statuses::seed_default_statuses(&db).await? {
        info!("Created default statuses");
    }

    let registry = api::build_registry()?;
    let state = AppState {
        config,
        db,
        registry: Arc::new(registry),
    };

    let api_routes = api::routes(&state)?;

    // create_router adds docs/middleware to our composed routes
    let router = create_router_with_doc(api_routes, openapi::api_doc(), &state.config.cors);

    // - /health: liveness check with app name/version
    // - /ready: readiness check with a database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting taskboard API with graceful shutdown (30s timeout)");

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        close_database(state.db, "postgres").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Taskboard API shutdown complete");
    Ok(())
}
