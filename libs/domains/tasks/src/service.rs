use std::sync::Arc;
use tracing::instrument;

use crate::error::TaskResult;
use crate::models::TaskMove;
use crate::repository::TaskRepository;

/// Task operations that the generic CRUD service does not cover
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Move tasks between statuses and positions as one batch.
    ///
    /// Moves apply in order, so a later move of the same id wins.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub async fn reorder(&self, moves: Vec<TaskMove>) -> TaskResult<()> {
        if moves.is_empty() {
            return Ok(());
        }

        self.repository.reorder(moves).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::repository::MockTaskRepository;
    use mockall::predicate::eq;

    fn moves() -> Vec<TaskMove> {
        vec![
            TaskMove {
                id: 1,
                status_id: Some(2),
                position: 0,
            },
            TaskMove {
                id: 9,
                status_id: Some(2),
                position: 1,
            },
        ]
    }

    #[tokio::test]
    async fn test_reorder_passes_batch_through() {
        let mut repo = MockTaskRepository::new();
        repo.expect_reorder()
            .with(eq(moves()))
            .times(1)
            .returning(|_| Ok(1));

        let service = TaskService::new(repo);
        service.reorder(moves()).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_batch_skips_repository() {
        let mut repo = MockTaskRepository::new();
        repo.expect_reorder().never();

        let service = TaskService::new(repo);
        service.reorder(Vec::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_reorder_surfaces_conflict() {
        let mut repo = MockTaskRepository::new();
        repo.expect_reorder()
            .returning(|_| Err(TaskError::Conflict("FOREIGN KEY constraint failed".into())));

        let service = TaskService::new(repo);
        let err = service.reorder(moves()).await.unwrap_err();
        assert!(matches!(err, TaskError::Conflict(_)));
    }
}
