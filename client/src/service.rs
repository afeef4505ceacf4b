use async_trait::async_trait;

use crate::{
    error::ClientError,
    models::{Task, User},
};

/// The API operations the dashboard depends on.
#[async_trait]
pub trait TaskService {
    async fn current_user(&self) -> Result<User, ClientError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;
    async fn create_task(&self, title: &str) -> Result<Task, ClientError>;
    async fn set_done(&self, id: i64, done: bool) -> Result<Task, ClientError>;
    async fn delete_task(&self, id: i64) -> Result<(), ClientError>;
    async fn logout(&self) -> Result<(), ClientError>;
}
