//! Handler tests for the Categories domain

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use core_crud::{CrudService, EntityRegistry};
use domain_categories::*;
use http_body_util::BodyExt;
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

async fn setup() -> (TestDatabase, Router) {
    let db = TestDatabase::sqlite().await;

    let mut registry = EntityRegistry::new();
    registry.register::<entity::Entity>().unwrap();
    let service = CrudService::<entity::Entity>::new(db.connection(), &registry).unwrap();

    (db, core_crud::router(service))
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
async fn test_category_crud_cycle() {
    let (_db, app) = setup().await;
    let builder = TestDataBuilder::from_test_name("category_cycle");
    let name = builder.name("category", "main");

    let (status, created) = send(&app, Method::POST, "/category/", Some(json!({"name": name}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], name);

    let uri = format!("/category/{}", created["id"]);
    let (status, renamed) = send(&app, Method::PUT, &uri, Some(json!({"name": "Home"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed, json!({"id": created["id"], "name": "Home"}));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_matches_name_case_insensitively() {
    let (_db, app) = setup().await;
    for name in ["Work", "Homework", "Errands"] {
        send(&app, Method::POST, "/category", Some(json!({"name": name}))).await;
    }

    let (status, page) = send(
        &app,
        Method::POST,
        "/category/search",
        Some(json!({"globalFilter": "WORK", "pageSize": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pageCount"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_id_and_missing_row() {
    let (_db, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/category/one", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");

    let (status, body) = send(&app, Method::GET, "/category/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category with id=5 not found");
}

#[tokio::test]
async fn test_deleting_referenced_category_is_rejected() {
    let (db, app) = setup().await;
    let (_, work) = send(&app, Method::POST, "/category", Some(json!({"name": "Work"}))).await;

    db.connection
        .execute_unprepared(&format!(
            "INSERT INTO task (title, created_at, priority, position, category_id) \
             VALUES ('t', '2025-01-01T00:00:00+00:00', 0, 0, {})",
            work["id"]
        ))
        .await
        .unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/category/{}", work["id"]), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
