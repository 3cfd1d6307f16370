//! User profile models

use serde::{Deserialize, Serialize};

use super::{Envelope, Task};

/// Account identity returned by login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountUser {
    pub id: i64,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,
}

/// The signed-in user as reported by `GET /api/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_count: Option<usize>,
}

/// `GET /api/profile` response: current user plus their tasks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}
