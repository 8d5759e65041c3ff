//! Generic search and CRUD over SeaORM entities.
//!
//! An entity opts in by implementing [`CrudEntity`] and being registered in an
//! [`EntityRegistry`]. [`CrudService`] then provides paged search plus
//! create/read/update/delete, and [`router`] exposes them over HTTP.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod patch;
pub mod query;
pub mod registry;
pub mod search;
pub mod service;

#[cfg(test)]
mod test_entity;

pub use entity::CrudEntity;
pub use error::{CrudError, CrudResult, is_constraint_violation};
pub use handlers::router;
pub use openapi::crud_openapi;
pub use registry::{
    ColumnDescriptor, EntityDescriptor, EntityRegistry, MatchStrategy, SearchableField,
};
pub use search::{SearchRequest, SearchResponse, page_count};
pub use service::{CrudService, finish};
