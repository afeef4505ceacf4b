use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The public projection of a user. The password hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: SessionUser,
}

impl User {
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn insert(
        db: &SqlitePool,
        email: &str,
        password_hash: &str,
    ) -> Result<SessionUser, sqlx::Error> {
        sqlx::query_as::<_, SessionUser>(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?) RETURNING id, email",
        )
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(db)
        .await
    }
}

impl SessionUser {
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> Result<Option<SessionUser>, sqlx::Error> {
        sqlx::query_as::<_, SessionUser>("SELECT id, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
    }
}
