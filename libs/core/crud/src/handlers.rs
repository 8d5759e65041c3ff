use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{IdPath, ValidatedJson};
use std::sync::Arc;

use crate::entity::CrudEntity;
use crate::error::CrudResult;
use crate::search::SearchRequest;
use crate::service::CrudService;

/// Routes for one entity, rooted at `/{E::NAME}`.
///
/// | Method | Path | |
/// |---|---|---|
/// | POST | `/{name}/search` | paged search |
/// | GET | `/{name}/all` | every row |
/// | POST | `/{name}` or `/{name}/` | create, 201 |
/// | GET/PUT/DELETE | `/{name}/{id}` | read, patch, delete (204) |
pub fn router<E: CrudEntity>(service: CrudService<E>) -> Router {
    let name = E::NAME;

    Router::new()
        .route(&format!("/{name}/search"), post(search::<E>))
        .route(&format!("/{name}/all"), get(get_all::<E>))
        .route(&format!("/{name}"), post(create::<E>))
        .route(&format!("/{name}/"), post(create::<E>))
        .route(
            &format!("/{name}/{{id}}"),
            get(get_one::<E>).put(update::<E>).delete(remove::<E>),
        )
        .with_state(Arc::new(service))
}

async fn search<E: CrudEntity>(
    State(service): State<Arc<CrudService<E>>>,
    ValidatedJson(request): ValidatedJson<SearchRequest>,
) -> CrudResult<impl IntoResponse> {
    Ok(Json(service.search(request).await?))
}

async fn get_all<E: CrudEntity>(
    State(service): State<Arc<CrudService<E>>>,
) -> CrudResult<impl IntoResponse> {
    Ok(Json(service.get_all().await?))
}

async fn get_one<E: CrudEntity>(
    State(service): State<Arc<CrudService<E>>>,
    IdPath(id): IdPath,
) -> CrudResult<impl IntoResponse> {
    Ok(Json(service.get(id).await?))
}

async fn create<E: CrudEntity>(
    State(service): State<Arc<CrudService<E>>>,
    ValidatedJson(input): ValidatedJson<E::Create>,
) -> CrudResult<impl IntoResponse> {
    let created = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update<E: CrudEntity>(
    State(service): State<Arc<CrudService<E>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<E::Update>,
) -> CrudResult<impl IntoResponse> {
    Ok(Json(service.update(id, input).await?))
}

async fn remove<E: CrudEntity>(
    State(service): State<Arc<CrudService<E>>>,
    IdPath(id): IdPath,
) -> CrudResult<StatusCode> {
    service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::note_service;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        router(note_service().await)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_create_with_and_without_trailing_slash() {
        let app = app().await;

        let (status, first) = send(&app, Method::POST, "/note", Some(json!({"title": "a"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["rank"], 0);

        let (status, second) = send(&app, Method::POST, "/note/", Some(json!({"title": "b"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let app = app().await;

        let (_, created) = send(&app, Method::POST, "/note", Some(json!({"title": "draft", "body": "x"}))).await;
        let uri = format!("/note/{}", created["id"]);

        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"body": null}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "draft");
        assert_eq!(updated["body"], Value::Null);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], format!("Note with id={} not found", created["id"]));
    }

    #[tokio::test]
    async fn test_all_returns_array() {
        let app = app().await;
        let (_, body) = send(&app, Method::GET, "/note/all", None).await;
        assert_eq!(body, json!([]));

        send(&app, Method::POST, "/note", Some(json!({"title": "one"}))).await;
        let (status, body) = send(&app, Method::GET, "/note/all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let app = app().await;
        for title in ["milk", "Oat milk", "bread"] {
            send(&app, Method::POST, "/note", Some(json!({"title": title}))).await;
        }

        let (status, body) = send(&app, Method::POST, "/note/search", Some(json!({"globalFilter": "MILK"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pageCount"], 1);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);

        let (status, body) = send(&app, Method::POST, "/note/search", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_far_past_last_page() {
        let app = app().await;
        send(&app, Method::POST, "/note", Some(json!({"title": "only"}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/note/search",
            Some(json!({"pageNo": 9_223_372_036_854_775_807u64, "pageSize": 20})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pageCount"], 1);
        assert_eq!(body["items"], json!([]));
    }

    #[tokio::test]
    async fn test_search_rejects_bad_requests() {
        let app = app().await;

        let (status, body) = send(&app, Method::POST, "/note/search", Some(json!({"pageSize": 21}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let (status, body) =
            send(&app, Method::POST, "/note/search", Some(json!({"orderByColumn": "nonexistent"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_COLUMN");
    }

    #[tokio::test]
    async fn test_bad_id_and_bad_body() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/note/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_ID");

        let (status, body) = send(&app, Method::POST, "/note", Some(json!({"title": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");

        let (status, _) = send(&app, Method::DELETE, "/note/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_unique_value_is_conflict() {
        let app = app().await;
        let payload = json!({"title": "a", "code": "X1"});

        send(&app, Method::POST, "/note", Some(payload.clone())).await;
        let (status, body) = send(&app, Method::POST, "/note", Some(payload)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "CONFLICT");
    }
}
