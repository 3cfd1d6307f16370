//! Task service API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod task_client;

pub use api::{AuthApi, TasksApi};
#[cfg(test)]
pub use mock::MockTasksApi;
pub use task_client::TaskClient;
