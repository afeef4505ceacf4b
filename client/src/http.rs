use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::ClientError,
    models::{Credentials, DoneUpdate, ErrorBody, NewTask, Task, User, UserEnvelope},
    service::TaskService,
};

/// HTTP client for the task list API.
///
/// Keeps its own cookie store, so a successful [`HttpClient::login`] signs
/// in every later request made through the same client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().cookie_store(true).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let envelope: UserEnvelope = decode(response).await?;
        Ok(envelope.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let envelope: UserEnvelope = decode(response).await?;
        Ok(envelope.user)
    }
}

#[async_trait]
impl TaskService for HttpClient {
    async fn current_user(&self) -> Result<User, ClientError> {
        let response = self.http.get(self.url("/api/auth/me")).send().await?;
        let envelope: UserEnvelope = decode(response).await?;
        Ok(envelope.user)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.http.get(self.url("/api/tasks")).send().await?;
        decode(response).await
    }

    async fn create_task(&self, title: &str) -> Result<Task, ClientError> {
        let response = self
            .http
            .post(self.url("/api/tasks"))
            .json(&NewTask { title })
            .send()
            .await?;
        decode(response).await
    }

    async fn set_done(&self, id: i64, done: bool) -> Result<Task, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/tasks/{id}")))
            .json(&DoneUpdate { done })
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/tasks/{id}")))
            .send()
            .await?;
        decode::<serde_json::Value>(response).await.map(drop)
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let response = self.http.post(self.url("/api/auth/logout")).send().await?;
        decode::<serde_json::Value>(response).await.map(drop)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_default();

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::CONFLICT => ClientError::Conflict(message),
        status => ClientError::Server { status, message },
    })
}
