//! Task API trait

use async_trait::async_trait;

use crate::client::models::{Envelope, NewTask, ProfileResponse, TaskPatch};
use crate::error::Result;

/// Task operations for the task service.
///
/// Every method issues exactly one request. Success of the operation is
/// reported by the envelope's `status`, so callers must check it.
#[async_trait]
pub trait TasksApi: Send + Sync {
    /// Current user and their tasks (`GET /api/profile`)
    async fn profile(&self) -> Result<ProfileResponse>;

    /// Create a task (`POST /api/tasks`)
    async fn create_task(&self, task: &NewTask) -> Result<Envelope>;

    /// Update fields of a task (`PATCH /api/tasks/{id}`)
    async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Envelope>;

    /// Delete a task (`DELETE /api/tasks/{id}`)
    async fn delete_task(&self, id: i64) -> Result<Envelope>;
}
