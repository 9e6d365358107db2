#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use potluck::middleware::issue_token;
use potluck::routes::AppState;
use potluck::server::build_router;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::util::ServiceExt;

pub const JWT_SECRET: &str = "integration_test_secret_at_least_32_chars!";

/// Router plus its backing pool, on an in-memory database with the real
/// migrations applied.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let state = AppState {
        pool: pool.clone(),
        jwt_secret: JWT_SECRET.to_string(),
    };
    (build_router(state), pool)
}

pub fn token_for(user_id: i64) -> String {
    issue_token(user_id, JWT_SECRET, 7).unwrap()
}

pub async fn seed_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, email, first_name, last_name) VALUES (?, ?, ?, ?)")
        .bind(username)
        .bind(format!("{username}@example.com"))
        .bind(username)
        .bind("tester")
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_ingredient(pool: &SqlitePool, name: &str, unit: &str) -> i64 {
    sqlx::query("INSERT INTO ingredients (name, measurement_unit) VALUES (?, ?)")
        .bind(name)
        .bind(unit)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_tag(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO tags (name, color, slug) VALUES (?, ?, ?)")
        .bind(name)
        .bind(format!("#{name}"))
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A well-formed recipe payload over the given ingredient/tag ids.
pub fn recipe_payload(
    name: &str,
    ingredients: &[(i64, i64)],
    tags: &[i64],
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "text": "steps",
        "image": "img.png",
        "cooking_time": 25,
        "ingredients": ingredients
            .iter()
            .map(|(id, amount)| serde_json::json!({"id": id, "amount": amount}))
            .collect::<Vec<_>>(),
        "tags": tags,
    })
}
