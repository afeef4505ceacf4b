use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Sqlx(sqlx::Error),
    PasswordHash(argon2::password_hash::Error),
    Join(tokio::task::JoinError),
    Body(JsonRejection),
    Unauthorized,
    LoginFail,
    Validation(&'static str),
    NotFound,
}

impl From<sqlx::Error> for AppError {
    fn from(inner: sqlx::Error) -> Self {
        AppError::Sqlx(inner)
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(inner: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(inner)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(inner: tokio::task::JoinError) -> Self {
        AppError::Join(inner)
    }
}

impl From<JsonRejection> for AppError {
    fn from(inner: JsonRejection) -> Self {
        AppError::Body(inner)
    }
}

const INTERNAL: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Sqlx(e) => {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return (
                            StatusCode::CONFLICT,
                            Json(json!({"error": "Email already exists"})),
                        )
                            .into_response();
                    }
                }
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
            }
            AppError::PasswordHash(e) => {
                tracing::error!(error = %e, "password hashing error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
            }
            AppError::Join(e) => {
                tracing::error!(error = %e, "blocking task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
            }
            AppError::Body(e) => {
                tracing::error!(error = %e, "unreadable request body");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AppError::LoginFail => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Task not found"),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
