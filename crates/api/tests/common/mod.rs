#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use taskboard_api::auth::jwt::TokenConfig;
use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;

/// Password used by [`register_user`].
pub const TEST_PASSWORD: &str = "test_password_123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        invitation_ttl_hours: 72,
        token: TokenConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        },
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`], with a caller-supplied configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

/// POST with no body at all.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), None)).await
}

pub async fn put_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

/// PUT with an empty body.
pub async fn put_empty_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::PUT, uri, Some(token), None)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

/// Register a user through the API and return `(user_id, token)`.
pub async fn register_user(app: Router, username: &str) -> (i64, String) {
    let body = json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/register", body).await;
    assert_eq!(response.status(), StatusCode::OK, "registration should succeed");
    let json = body_json(response).await;
    let id = json["user"]["id"].as_i64().expect("user id");
    let token = json["token"].as_str().expect("token").to_string();
    (id, token)
}

/// Create a project through the API as `token`'s user and return its id.
pub async fn create_project(app: Router, token: &str, name: &str) -> i64 {
    let response = post_json_auth(app, "/projects", token, json!({ "project_name": name })).await;
    assert_eq!(response.status(), StatusCode::OK, "project creation should succeed");
    body_json(response).await["id"].as_i64().expect("project id")
}

/// Have `owner` invite and `member` accept, making `member` a participant.
pub async fn add_participant(app: Router, project_id: i64, owner: &str, member: &str) {
    let response = post_auth(app.clone(), &format!("/projects/{project_id}/invitations"), owner).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let code = body_json(response).await["code"]
        .as_str()
        .expect("invitation code")
        .to_string();

    let response = post_auth(app, &format!("/invitations/{code}/accept"), member).await;
    assert_eq!(response.status(), StatusCode::OK, "accept should succeed");
}
