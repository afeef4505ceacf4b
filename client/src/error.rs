use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("not signed in")]
    Unauthorized,
    #[error("task not found")]
    NotFound,
    #[error("rejected: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("server error {status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
