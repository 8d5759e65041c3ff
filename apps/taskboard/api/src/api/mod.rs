use axum::Router;
use core_crud::{CrudResult, CrudService, EntityRegistry};
use domain_tasks::{PgTaskRepository, TaskService};

pub mod health;

type StatusEntity = domain_statuses::entity::Entity;
type CategoryEntity = domain_categories::entity::Entity;
type TaskEntity = domain_tasks::entity::Entity;

/// Registers every served entity; fails if a searchable field is misdeclared.
pub fn build_registry() -> CrudResult<EntityRegistry> {
    let mut registry = EntityRegistry::new();
    registry
        .register::<StatusEntity>()?
        .register::<CategoryEntity>()?
        .register::<TaskEntity>()?;
    Ok(registry)
}

/// Creates the entity routes, mounted at the root (`/task`, `/status`, `/category`).
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> CrudResult<Router> {
    let statuses = CrudService::<StatusEntity>::new(state.db.clone(), &state.registry)?;
    let categories = CrudService::<CategoryEntity>::new(state.db.clone(), &state.registry)?;
    let tasks = CrudService::<TaskEntity>::new(state.db.clone(), &state.registry)?;
    let task_service = TaskService::new(PgTaskRepository::new(state.db.clone()));

    Ok(Router::new()
        .merge(core_crud::router(statuses))
        .merge(core_crud::router(categories))
        .merge(domain_tasks::handlers::router(tasks, task_service)))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
