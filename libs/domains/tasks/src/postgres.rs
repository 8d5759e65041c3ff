use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tracing::{debug, warn};

use crate::{
    entity,
    error::TaskResult,
    models::TaskMove,
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn apply(&self, txn: &DatabaseTransaction, moves: &[TaskMove]) -> TaskResult<usize> {
        let mut moved = 0;
        for task_move in moves {
            if self.base.find_by_id(txn, task_move.id).await?.is_none() {
                debug!(task_id = task_move.id, "Skipping move of unknown task");
                continue;
            }

            let active = entity::ActiveModel {
                status_id: Set(task_move.status_id),
                position: Set(task_move.position),
                ..Default::default()
            };
            self.base.update(txn, task_move.id, active).await?;
            moved += 1;
        }
        Ok(moved)
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn reorder(&self, moves: Vec<TaskMove>) -> TaskResult<usize> {
        let txn = self.base.begin().await?;

        match self.apply(&txn, &moves).await {
            Ok(moved) => {
                txn.commit().await?;
                tracing::info!(requested = moves.len(), moved, "Reordered tasks");
                Ok(moved)
            }
            Err(err) => {
                if let Err(rollback) = txn.rollback().await {
                    warn!(error = %rollback, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
