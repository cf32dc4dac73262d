#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use villagehub::router::init_router;
use villagehub::state::AppState;
use villagehub_auth::{Identity, Role, create_token};
use villagehub_config::JwtConfig;
use villagehub_core::hash_password;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "password123";

pub fn jwt_config() -> JwtConfig {
    JwtConfig::with_secret(TEST_SECRET)
}

pub fn token_for(user_id: i32, role: Role) -> String {
    let identity = Identity {
        user_id,
        username: format!("user{}", user_id),
        role,
    };
    create_token(&identity, &jwt_config()).unwrap()
}

/// Well-formed token signed with a secret the app does not know.
pub fn forged_token(user_id: i32, role: Role) -> String {
    let identity = Identity {
        user_id,
        username: "mallory".to_string(),
        role,
    };
    create_token(&identity, &JwtConfig::with_secret("not-the-server-secret")).unwrap()
}

pub fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("cookie", format!("auth_token={}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("cookie", format!("auth_token={}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Full application over a pool that never connects; fine for requests the
/// gate answers itself.
pub fn setup_test_app() -> Router {
    init_router(AppState::for_tests(jwt_config()))
}

pub fn setup_db_app(pool: PgPool) -> Router {
    let mut state = AppState::for_tests(jwt_config());
    state.db = pool;
    init_router(state)
}

pub async fn create_user(pool: &PgPool, username: &str, role: Role) -> i32 {
    let hashed = hash_password(TEST_PASSWORD).unwrap();
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (username, email, password, role) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(username)
    .bind(format!("{}@desa.test", username))
    .bind(hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap()
}
