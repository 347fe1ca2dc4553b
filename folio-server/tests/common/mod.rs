//! Shared test harness: in-memory database, app router, admin token.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use folio_server::auth::{create_token, hash_password};
use folio_server::db::{self, menu_items::NewMenuItem};
use folio_server::{AppState, build_app};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-secret";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "password123";

pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    pub token: String,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::connect_in_memory().await.unwrap();
        let upload_dir = tempfile::tempdir().unwrap();

        let hash = hash_password(ADMIN_PASSWORD).unwrap();
        let admin = db::admins::upsert(&pool, ADMIN_EMAIL, &hash).await.unwrap();
        let token = create_token(admin.id, &admin.email, JWT_SECRET).unwrap();

        let state = AppState::from_parts(
            pool.clone(),
            JWT_SECRET,
            "http://localhost:5001",
            upload_dir.path().to_path_buf(),
        );

        Self {
            app: build_app(state),
            pool,
            token,
            upload_dir,
        }
    }

    /// JSON request with the admin token
    pub async fn admin(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(&self.app, method, uri, Some(&self.token), body.map(|b| b.to_string())).await
    }

    /// JSON request without credentials
    pub async fn public(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        send(&self.app, method, uri, None, None).await
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Insert a manual menu item and return its id
pub async fn seed_item(pool: &SqlitePool, label: &str, order: i32, is_active: bool) -> i64 {
    db::menu_items::insert(
        pool,
        &NewMenuItem {
            label: label.to_string(),
            url: format!("/{}", label.to_lowercase()),
            image_url: None,
            order,
            is_active,
            source_slug: None,
        },
    )
    .await
    .unwrap()
}

/// Menu ids in canonical order
pub async fn menu_sequence(pool: &SqlitePool) -> Vec<i64> {
    db::menu_items::list_all(pool)
        .await
        .unwrap()
        .iter()
        .map(|item| item.id)
        .collect()
}
