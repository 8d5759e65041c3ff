use chrono::{DateTime, Utc};
use core_crud::patch::nullable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::entity;

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Set by the server at creation
    pub created_at: DateTime<Utc>,
    pub priority: i32,
    /// Ordering key within `status_id`; lower sorts first
    pub position: i32,
    pub status_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl From<entity::Model> for Task {
    fn from(model: entity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            due_date: model.due_date.map(Into::into),
            created_at: model.created_at.into(),
            priority: model.priority,
            position: model.position,
            status_id: model.status_id,
            category_id: model.category_id,
        }
    }
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status_id: i32,
    pub category_id: Option<i32>,
    pub priority: i32,
    /// Appended after the last task of the status when omitted
    pub position: Option<i32>,
}

/// DTO for patching a task
///
/// Omitted fields are left alone; `null` clears a nullable field.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1))]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub status_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub category_id: Option<Option<i32>>,
    pub priority: Option<i32>,
    pub position: Option<i32>,
}

/// One entry of a reorder batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TaskMove {
    pub id: i32,
    pub status_id: Option<i32>,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderResponse {
    pub ok: bool,
}
