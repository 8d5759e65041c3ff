//! Tasks Domain
//!
//! Tasks are served by the generic CRUD layer (`core_crud`) and add one thing
//! of their own: an ordered `position` within each status.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │  Handlers   │────▶│ CrudService  │  ← search, get, create, update, delete
//! └──────┬──────┘     └──────────────┘
//!        │
//! ┌──────▼──────┐
//! │ TaskService │  ← reorder
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + Postgres implementation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_crud::{CrudService, EntityRegistry};
//! use domain_tasks::{PgTaskRepository, TaskService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let mut registry = EntityRegistry::new();
//! registry.register::<domain_tasks::entity::Entity>()?;
//!
//! let crud = CrudService::new(db.clone(), &registry)?;
//! let service = TaskService::new(PgTaskRepository::new(db));
//! let app = domain_tasks::handlers::router(crud, service);
//! # Ok(())
//! # }
//! ```

mod crud;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod position;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use handlers::TaskApiDoc;
pub use models::{CreateTask, ReorderResponse, Task, TaskMove, UpdateTask};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
