//! Client side of the task list: a typed HTTP client for the API and the
//! dashboard controller that drives it.

pub mod dashboard;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use dashboard::{Dashboard, DashboardState, Route};
pub use error::ClientError;
pub use http::HttpClient;
pub use models::{Task, User};
pub use service::TaskService;
