//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extracts a single integer `{id}` path segment.
///
/// Anything that does not parse as an `i32` is rejected with a 400 `INVALID_ID`
/// error body instead of axum's plain-text path rejection.
///
/// ```ignore
/// async fn get_task(IdPath(id): IdPath) -> String {
///     format!("Task {id}")
/// }
///
/// let app = Router::new().route("/task/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        raw.trim()
            .parse::<i32>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(raw).into_response())
    }
}
