use core_crud::crud_openapi;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "Tasks grouped by status columns, with categories and free-text search"
    )
)]
pub struct ApiDoc;

/// Full document: the static parts above plus the generated CRUD paths of every entity.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(crud_openapi::<domain_statuses::entity::Entity>());
    doc.merge(crud_openapi::<domain_categories::entity::Entity>());
    doc.merge(crud_openapi::<domain_tasks::entity::Entity>());
    doc.merge(domain_tasks::TaskApiDoc::openapi());
    doc
}
