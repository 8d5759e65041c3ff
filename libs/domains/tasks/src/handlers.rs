use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};
use axum_helpers::AppError;
use axum_helpers::errors::responses::{BadRequestValidationResponse, ConflictResponse};
use core_crud::CrudService;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::models::{ReorderResponse, TaskMove};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the task routes outside the generic CRUD set
#[derive(OpenApi)]
#[openapi(
    paths(reorder_tasks),
    components(
        schemas(TaskMove, ReorderResponse),
        responses(BadRequestValidationResponse, ConflictResponse)
    ),
    tags((name = "task", description = "Task operations"))
)]
pub struct TaskApiDoc;

/// Generic CRUD routes under `/task` plus `POST /task/reorder`
pub fn router<R: TaskRepository + 'static>(
    crud: CrudService<entity::Entity>,
    service: TaskService<R>,
) -> Router {
    let reorder = Router::new()
        .route("/task/reorder", post(reorder_tasks::<R>))
        .with_state(Arc::new(service));

    core_crud::router(crud).merge(reorder)
}

/// Move tasks between statuses and positions in one transaction
#[utoipa::path(
    post,
    path = "/task/reorder",
    tag = "task",
    request_body = Vec<TaskMove>,
    responses(
        (status = 200, description = "All moves applied; unknown ids are ignored", body = ReorderResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
    )
)]
pub async fn reorder_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    payload: Result<Json<Vec<TaskMove>>, JsonRejection>,
) -> Result<Json<ReorderResponse>, AppError> {
    let Json(moves) = payload?;
    service.reorder(moves).await?;
    Ok(Json(ReorderResponse { ok: true }))
}
