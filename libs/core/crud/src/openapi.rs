//! OpenAPI document for the routes built by [`crate::handlers::router`].
//!
//! The handlers are generic over the entity, so the document is assembled with
//! utoipa's builders instead of `#[utoipa::path]`.

use axum_helpers::ErrorResponse;
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::ResponseBuilder;
use utoipa::openapi::schema::{Array, ObjectBuilder, Schema};
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{
    ComponentsBuilder, ContentBuilder, OpenApi, OpenApiBuilder, PathsBuilder, Ref, RefOr,
    Required, Response,
};
use utoipa::{PartialSchema, ToSchema};

use crate::entity::CrudEntity;
use crate::search::SearchRequest;

const JSON: &str = "application/json";

/// Paths, schemas and a tag for entity `E`.
pub fn crud_openapi<E: CrudEntity>() -> OpenApi {
    let name = E::NAME;
    let label = E::LABEL;
    let dto = E::Dto::name().to_string();
    let page = format!("{label}SearchResponse");

    let search = operation::<E>(format!("search_{name}"), format!("Search {label} rows"))
        .request_body(Some(json_body(SearchRequest::name().to_string())))
        .response("200", json_response(format!("Page of {label} rows"), Ref::from_schema_name(&page)))
        .response("400", error_response("Invalid paging, filter or orderByColumn"))
        .build();

    let all = operation::<E>(format!("list_{name}"), format!("All {label} rows in id order"))
        .response(
            "200",
            json_response(
                format!("Every {label}"),
                RefOr::T(Schema::Array(Array::new(Ref::from_schema_name(&dto)))),
            ),
        )
        .build();

    let create = operation::<E>(format!("create_{name}"), format!("Create a {label}"))
        .request_body(Some(json_body(E::Create::name().to_string())))
        .response("201", json_response(format!("{label} created"), Ref::from_schema_name(&dto)))
        .response("400", error_response("Validation failed"))
        .response("409", error_response("Constraint violation"))
        .build();

    let get = with_id(operation::<E>(format!("get_{name}"), format!("Get a {label} by id")))
        .response("200", json_response(format!("{label} found"), Ref::from_schema_name(&dto)))
        .response("404", error_response("Not found"))
        .build();

    let update = with_id(operation::<E>(format!("update_{name}"), format!("Patch a {label}")))
        .request_body(Some(json_body(E::Update::name().to_string())))
        .response("200", json_response(format!("{label} updated"), Ref::from_schema_name(&dto)))
        .response("400", error_response("Validation failed"))
        .response("404", error_response("Not found"))
        .build();

    let delete = with_id(operation::<E>(format!("delete_{name}"), format!("Delete a {label}")))
        .response("204", ResponseBuilder::new().description(format!("{label} deleted")).build())
        .response("404", error_response("Not found"))
        .build();

    let paths = PathsBuilder::new()
        .path(format!("/{name}/search"), item(HttpMethod::Post, search))
        .path(format!("/{name}/all"), item(HttpMethod::Get, all))
        .path(format!("/{name}"), item(HttpMethod::Post, create))
        .path(
            format!("/{name}/{{id}}"),
            PathItemBuilder::new()
                .operation(HttpMethod::Get, get)
                .operation(HttpMethod::Put, update)
                .operation(HttpMethod::Delete, delete)
                .build(),
        )
        .build();

    let page_schema = ObjectBuilder::new()
        .property("pageCount", u64::schema())
        .required("pageCount")
        .property(
            "items",
            RefOr::T(Schema::Array(Array::new(Ref::from_schema_name(&dto)))),
        )
        .required("items")
        .build();

    let mut components = ComponentsBuilder::new().schema(page, Schema::Object(page_schema));
    components = register::<E::Dto>(components);
    components = register::<E::Create>(components);
    components = register::<E::Update>(components);
    components = register::<SearchRequest>(components);
    components = register::<ErrorResponse>(components);

    OpenApiBuilder::new()
        .paths(paths)
        .components(Some(components.build()))
        .tags(Some(vec![TagBuilder::new().name(name).build()]))
        .build()
}

fn operation<E: CrudEntity>(id: String, summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tag(E::NAME)
        .operation_id(Some(id))
        .summary(Some(summary))
}

fn with_id(builder: OperationBuilder) -> OperationBuilder {
    builder
        .parameter(
            ParameterBuilder::new()
                .name("id")
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(i32::schema()))
                .build(),
        )
        .response("400", error_response("Id is not an integer"))
}

fn item(method: HttpMethod, operation: Operation) -> utoipa::openapi::PathItem {
    PathItemBuilder::new().operation(method, operation).build()
}

fn json_body(schema: String) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(JSON, ContentBuilder::new().schema(Some(Ref::from_schema_name(schema))).build())
        .required(Some(Required::True))
        .build()
}

fn json_response(description: String, schema: impl Into<RefOr<Schema>>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description.to_string(), Ref::from_schema_name(ErrorResponse::name()))
}

fn register<T: ToSchema>(builder: ComponentsBuilder) -> ComponentsBuilder {
    let mut nested = Vec::new();
    T::schemas(&mut nested);
    builder
        .schema(T::name(), T::schema())
        .schemas_from_iter(nested)
}
