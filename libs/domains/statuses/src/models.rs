use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entity;

/// A board column that tasks are grouped by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub id: i32,
    pub name: String,
    pub order: i32,
}

impl From<entity::Model> for Status {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            order: model.order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateStatus {
    #[validate(length(min = 1))]
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStatus {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub order: Option<i32>,
}
