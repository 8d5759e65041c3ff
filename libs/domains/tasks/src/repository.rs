use async_trait::async_trait;

use crate::error::TaskResult;
use crate::models::TaskMove;

/// Task persistence beyond the generic CRUD operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Apply every move in one transaction, skipping unknown ids.
    ///
    /// Returns the number of tasks that were moved.
    async fn reorder(&self, moves: Vec<TaskMove>) -> TaskResult<usize>;
}
