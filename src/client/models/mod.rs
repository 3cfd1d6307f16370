//! Task service API data models
//!
//! Wire types exchanged with the task service, organized by resource.

mod auth;
mod envelope;
mod task;
mod user;

pub use auth::{Credentials, LoginResponse, Registration};
pub use envelope::Envelope;
#[cfg(test)]
pub use envelope::SUCCESS_STATUS;
pub use task::{NewTask, Task, TaskPatch};
pub use user::{AccountUser, ProfileResponse};
