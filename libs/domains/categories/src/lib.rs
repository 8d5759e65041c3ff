//! Categories Domain
//!
//! A flat lookup list tasks can be tagged with.

pub mod entity;
pub mod models;

use core_crud::patch::set_if_present;
use core_crud::{CrudEntity, SearchableField};
use sea_orm::ActiveValue::{NotSet, Set};

pub use models::{Category, CreateCategory, UpdateCategory};

impl CrudEntity for entity::Entity {
    const NAME: &'static str = "category";
    const LABEL: &'static str = "Category";

    type Active = entity::ActiveModel;
    type Dto = Category;
    type Create = CreateCategory;
    type Update = UpdateCategory;

    fn searchable_fields() -> Vec<SearchableField> {
        vec![SearchableField::partial("name", 1)]
    }

    fn new_active(input: CreateCategory) -> entity::ActiveModel {
        entity::ActiveModel {
            id: NotSet,
            name: Set(input.name),
        }
    }

    fn patch_active(input: UpdateCategory) -> entity::ActiveModel {
        entity::ActiveModel {
            name: set_if_present(input.name),
            ..Default::default()
        }
    }
}
