//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Credentials, Envelope, LoginResponse, Registration};
use crate::error::Result;

/// Authentication operations for the task service
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token (`POST /api/login`)
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    /// Create an account (`POST /api/register`)
    async fn register(&self, registration: &Registration) -> Result<Envelope>;

    /// End the session. Never fails: server errors are logged and the local
    /// session is cleared regardless.
    async fn logout(&self);
}
