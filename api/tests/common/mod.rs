//! Shared helpers for the router integration tests.
//!
//! Each test builds its own router over a private in-memory SQLite database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use tasklist_api::{config::PasswordConfig, db, rest, AppState};

pub const CHEAP_PASSWORDS: PasswordConfig = PasswordConfig {
    memory_kib: 64,
    iterations: 1,
    parallelism: 1,
};

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn spawn_app() -> TestApp {
    let db = db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database should open");
    let state = AppState {
        db: db.clone(),
        cookie_secure: false,
        password: CHEAP_PASSWORDS,
    };
    TestApp {
        router: rest::router(state),
        db,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/api/auth/register",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        )
        .await
    }

    /// Registers a user, signs in, and returns the `Cookie` header value.
    pub async fn sign_up(&self, email: &str) -> String {
        let registered = self.register(email, "hunter2").await;
        assert_eq!(registered.status, StatusCode::CREATED);
        let response = self.login(email, "hunter2").await;
        assert_eq!(response.status, StatusCode::OK);
        session_cookie(&response.headers).expect("login should set a session cookie")
    }

    pub async fn create_task(&self, cookie: &str, title: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/api/tasks",
            Some(cookie),
            Some(serde_json::json!({ "title": title })),
        )
        .await
    }

    pub async fn task_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.db)
            .await
            .unwrap()
    }
}

/// The `name=value` pair of the `user_id` Set-Cookie header, if any.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("user_id="))
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
}

pub fn set_cookie_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
