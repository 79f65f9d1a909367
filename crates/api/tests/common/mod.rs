#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tabula_api::config::ServerConfig;
use tabula_api::router::build_app_router;
use tabula_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is unused because
/// `#[sqlx::test]` hands each test its own pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so tests exercise
/// the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

/// POST without a body (membership add).
pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `uri` and return the `id` of the created row.
pub async fn create_id(pool: &PgPool, uri: &str, json: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, json).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
