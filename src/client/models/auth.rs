//! Authentication models

use serde::{Deserialize, Serialize};

use super::{AccountUser, Envelope};

/// Body of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// `POST /api/login` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    /// Bearer token, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountUser>,
}
