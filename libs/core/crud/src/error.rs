use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::sqlx::Error as SqlxError;
use sea_orm::sqlx::error::ErrorKind;
use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum CrudError {
    #[error("{0}")]
    NotFound(String),

    /// Unknown sort column or a searchable field that is not a text column
    #[error("{0}")]
    InvalidColumn(String),

    /// Input DTO failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    /// Write rejected by a storage constraint on update or delete
    #[error("{0}")]
    Validation(String),

    /// Write rejected by a storage constraint on create
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type CrudResult<T> = Result<T, CrudError>;

impl CrudError {
    /// Sends constraint violations to `on_constraint`, everything else to [`CrudError::Database`].
    pub fn classify(err: DbErr, on_constraint: fn(String) -> CrudError) -> Self {
        if is_constraint_violation(&err) {
            on_constraint(err.to_string())
        } else {
            CrudError::Database(err)
        }
    }
}

/// True for FK, unique, not-null and check violations.
pub fn is_constraint_violation(err: &DbErr) -> bool {
    if err.sql_err().is_some() {
        return true;
    }

    match err {
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err)))
        | DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
        ),
        _ => false,
    }
}

impl From<CrudError> for AppError {
    fn from(err: CrudError) -> Self {
        match err {
            CrudError::NotFound(msg) => AppError::NotFound(msg),
            CrudError::InvalidColumn(msg) => AppError::InvalidColumn(msg),
            CrudError::InvalidInput(errors) => AppError::ValidationError(errors),
            CrudError::Validation(msg) => AppError::BadRequest(msg),
            CrudError::Conflict(msg) => AppError::Conflict(msg),
            CrudError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
