pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod rest;
pub mod session;

use sqlx::SqlitePool;

use crate::config::{Config, PasswordConfig};

/// Shared handler state. The pool is the only storage handle; handlers
/// receive it through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub cookie_secure: bool,
    pub password: PasswordConfig,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &Config) -> Self {
        Self {
            db,
            cookie_secure: config.cookie_secure,
            password: config.password,
        }
    }
}
