//! Statuses Domain
//!
//! Board columns that tasks are grouped and ordered by. Served entirely by the
//! generic CRUD layer; the only extra behaviour is seeding the defaults at startup.

mod crud;
pub mod entity;
pub mod models;
pub mod seed;

pub use models::{CreateStatus, Status, UpdateStatus};
pub use seed::{DEFAULT_STATUSES, seed_default_statuses};
