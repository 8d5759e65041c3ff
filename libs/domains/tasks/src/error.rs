use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use core_crud::is_constraint_violation;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A move referenced a status that does not exist
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<DbErr> for TaskError {
    fn from(err: DbErr) -> Self {
        if is_constraint_violation(&err) {
            TaskError::Conflict(err.to_string())
        } else {
            TaskError::Database(err)
        }
    }
}

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Conflict(msg) => AppError::Conflict(msg),
            TaskError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_conflict_is_409() {
        let response = TaskError::Conflict("fk".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_plain_db_error_is_not_a_conflict() {
        let err = TaskError::from(DbErr::Custom("boom".into()));
        assert!(matches!(err, TaskError::Database(_)));
    }
}
