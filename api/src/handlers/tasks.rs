use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    error::AppError,
    models::{task::Task, MessageResponse},
    session::CurrentUser,
    AppState,
};

#[tracing::instrument(skip_all, fields(user_id = user.id))]
pub async fn list_tasks(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = Task::list_for_owner(&state.db, user.id).await?;
    Ok(Json(tasks))
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
pub async fn create_task(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let Json(body) = body?;
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .ok_or(AppError::Validation("Title is required"))?;

    let task = Task::insert(&state.db, user.id, title).await?;
    tracing::debug!(task_id = task.id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
pub async fn update_task(
    CurrentUser(user): CurrentUser,
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Task>, AppError> {
    let Json(body) = body?;
    let done = body
        .get("done")
        .and_then(Value::as_bool)
        .ok_or(AppError::Validation("Done must be a boolean"))?;
    let Ok(Path(task_id)) = path else {
        return Err(AppError::NotFound);
    };

    let task = Task::set_done_for_owner(&state.db, task_id, user.id, done)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::debug!(task_id, done, "task updated");

    Ok(Json(task))
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
pub async fn delete_task(
    CurrentUser(user): CurrentUser,
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let Ok(Path(task_id)) = path else {
        return Err(AppError::NotFound);
    };

    if !Task::delete_for_owner(&state.db, task_id, user.id).await? {
        return Err(AppError::NotFound);
    }
    tracing::debug!(task_id, "task deleted");

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
