use async_trait::async_trait;
use core_crud::patch::set_if_present;
use core_crud::{CrudEntity, SearchableField};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseTransaction, DbErr};

use crate::entity::{ActiveModel, Entity};
use crate::models::{CreateTask, Task, UpdateTask};
use crate::position::next_position;

#[async_trait]
impl CrudEntity for Entity {
    const NAME: &'static str = "task";
    const LABEL: &'static str = "Task";

    type Active = ActiveModel;
    type Dto = Task;
    type Create = CreateTask;
    type Update = UpdateTask;

    fn searchable_fields() -> Vec<SearchableField> {
        vec![
            SearchableField::partial("title", 1),
            SearchableField::partial("description", 1),
        ]
    }

    fn new_active(input: CreateTask) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            due_date: Set(input.due_date.map(Into::into)),
            created_at: Set(chrono::Utc::now().into()),
            priority: Set(input.priority),
            position: set_if_present(input.position),
            status_id: Set(Some(input.status_id)),
            category_id: Set(input.category_id),
        }
    }

    fn patch_active(input: UpdateTask) -> ActiveModel {
        ActiveModel {
            title: set_if_present(input.title),
            description: set_if_present(input.description),
            due_date: set_if_present(input.due_date.map(|due| due.map(Into::into))),
            priority: set_if_present(input.priority),
            position: set_if_present(input.position),
            status_id: set_if_present(input.status_id),
            category_id: set_if_present(input.category_id),
            ..Default::default()
        }
    }

    /// Appends the task to its status when no position was given.
    async fn before_insert(txn: &DatabaseTransaction, active: &mut ActiveModel) -> Result<(), DbErr> {
        if active.position.is_set() {
            return Ok(());
        }

        if let Set(Some(status_id)) = &active.status_id {
            active.position = Set(next_position(txn, *status_id).await?);
        }
        Ok(())
    }
}
