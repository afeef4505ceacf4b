use serde::Serialize;

pub mod task;
pub mod user;

/// Plain acknowledgement body, e.g. `{"message": "Task deleted successfully"}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
