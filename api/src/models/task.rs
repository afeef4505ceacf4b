use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// A task as stored and as returned to its owner.
///
/// Every lookup that mutates or deletes a task is filtered by both `id` and
/// `user_id`, so a task owned by someone else is indistinguishable from one
/// that does not exist.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub done: bool,
    #[serde(skip)]
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

const COLUMNS: &str = "id, title, done, user_id, created_at";

impl Task {
    /// Newest first; ties on the timestamp fall back to insertion order.
    pub async fn list_for_owner(db: &SqlitePool, owner: i64) -> Result<Vec<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!(
            "SELECT {COLUMNS} FROM tasks WHERE user_id = ? ORDER BY created_at DESC, id DESC"
        ))
        .bind(owner)
        .fetch_all(db)
        .await
    }

    pub async fn insert(db: &SqlitePool, owner: i64, title: &str) -> Result<Task, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (title, done, user_id, created_at) VALUES (?, 0, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(title)
        .bind(owner)
        .bind(Utc::now())
        .fetch_one(db)
        .await
    }

    pub async fn set_done_for_owner(
        db: &SqlitePool,
        id: i64,
        owner: i64,
        done: bool,
    ) -> Result<Option<Task>, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks SET done = ? WHERE id = ? AND user_id = ? RETURNING {COLUMNS}"
        ))
        .bind(done)
        .bind(id)
        .bind(owner)
        .fetch_optional(db)
        .await
    }

    /// Returns whether a row owned by `owner` was removed.
    pub async fn delete_for_owner(db: &SqlitePool, id: i64, owner: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(owner)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
