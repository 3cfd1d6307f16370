//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login, registration and logout
//! - [`TasksApi`] - Task listing and mutation

mod auth;
mod tasks;

pub use auth::AuthApi;
pub use tasks::TasksApi;
