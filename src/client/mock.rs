//! Mock task API client for testing
//!
//! Provides an in-memory implementation of the API traits for unit testing
//! without making real API calls. The mock behaves like a tiny server: created
//! tasks show up in the next profile fetch, deletes remove them.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, TasksApi};
use super::models::{
    AccountUser, Credentials, Envelope, LoginResponse, NewTask, ProfileResponse, Registration,
    SUCCESS_STATUS, Task, TaskPatch,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockTasksApi::new().with_tasks(vec![task(1, "Buy milk", false)]).await;
/// let profile = mock.profile().await?;
/// assert_eq!(profile.tasks.unwrap().len(), 1);
/// ```
#[derive(Default)]
pub struct MockTasksApi {
    /// Server-side task list
    tasks: Arc<Mutex<Vec<Task>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Non-success envelope to return (if any) - consumed on first use
    rejection: Arc<Mutex<Option<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub logout: usize,
    pub profile: usize,
    pub create_task: usize,
    pub update_task: usize,
    pub delete_task: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.register
            + self.logout
            + self.profile
            + self.create_task
            + self.update_task
            + self.delete_task
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// HTTP method the real client would use
    pub method: String,
    /// Request path
    pub path: String,
    /// JSON body, if any
    pub body: Option<serde_json::Value>,
}

impl MockTasksApi {
    /// Create a new mock client with an empty task list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the server-side task list.
    pub async fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.lock().await = tasks;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make the next call answer with a non-success envelope.
    pub async fn with_rejection(self, message: &str) -> Self {
        *self.rejection.lock().await = Some(message.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Current server-side task list.
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Take a pending rejection as a failed envelope.
    async fn take_rejection(&self) -> Option<Envelope> {
        self.rejection.lock().await.take().map(|message| Envelope {
            status: "error".to_string(),
            message: Some(message),
        })
    }

    /// Record a captured request for test assertions.
    async fn capture_request(&self, method: &str, path: &str, body: Option<serde_json::Value>) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
    }

    fn success(message: &str) -> Envelope {
        Envelope {
            status: SUCCESS_STATUS.to_string(),
            message: Some(message.to_string()),
        }
    }

    fn not_found(id: i64) -> Envelope {
        Envelope {
            status: "error".to_string(),
            message: Some(format!("Task {} not found", id)),
        }
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockTasksApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.capture_request("POST", "/api/login", serde_json::to_value(credentials).ok())
            .await;
        self.check_error().await?;
        self.call_count.lock().await.login += 1;

        if let Some(envelope) = self.take_rejection().await {
            return Ok(LoginResponse {
                envelope,
                ..LoginResponse::default()
            });
        }

        Ok(LoginResponse {
            envelope: Self::success("Login successful"),
            token: Some("mock-token".to_string()),
            user: Some(AccountUser {
                id: 1,
                username: credentials.username.clone(),
                email: format!("{}@example.com", credentials.username),
            }),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<Envelope> {
        self.capture_request(
            "POST",
            "/api/register",
            serde_json::to_value(registration).ok(),
        )
        .await;
        self.check_error().await?;
        self.call_count.lock().await.register += 1;

        if let Some(envelope) = self.take_rejection().await {
            return Ok(envelope);
        }
        Ok(Self::success("User registered"))
    }

    async fn logout(&self) {
        self.capture_request("POST", "/api/logout", None).await;
        self.call_count.lock().await.logout += 1;
    }
}

// ============================================================================
// TasksApi Implementation
// ============================================================================

#[async_trait]
impl TasksApi for MockTasksApi {
    async fn profile(&self) -> Result<ProfileResponse> {
        self.capture_request("GET", "/api/profile", None).await;
        self.check_error().await?;
        self.call_count.lock().await.profile += 1;

        if let Some(envelope) = self.take_rejection().await {
            return Ok(ProfileResponse {
                envelope,
                ..ProfileResponse::default()
            });
        }

        Ok(ProfileResponse {
            envelope: Self::success("ok"),
            user: None,
            tasks: Some(self.tasks.lock().await.clone()),
        })
    }

    async fn create_task(&self, task: &NewTask) -> Result<Envelope> {
        self.capture_request("POST", "/api/tasks", serde_json::to_value(task).ok())
            .await;
        self.check_error().await?;
        self.call_count.lock().await.create_task += 1;

        if let Some(envelope) = self.take_rejection().await {
            return Ok(envelope);
        }

        let mut tasks = self.tasks.lock().await;
        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        tasks.push(Task {
            id,
            title: task.title.clone(),
            text: Some(task.text.clone()),
            datetime: Some(task.datetime.clone()),
            completed: false,
            timestamp: None,
        });

        Ok(Self::success("Task created"))
    }

    async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Envelope> {
        let path = format!("/api/tasks/{}", id);
        self.capture_request("PATCH", &path, serde_json::to_value(patch).ok())
            .await;
        self.check_error().await?;
        self.call_count.lock().await.update_task += 1;

        if let Some(envelope) = self.take_rejection().await {
            return Ok(envelope);
        }

        let mut tasks = self.tasks.lock().await;
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                if let Some(completed) = patch.completed {
                    task.completed = completed;
                }
                Ok(Self::success("Task updated"))
            }
            None => Ok(Self::not_found(id)),
        }
    }

    async fn delete_task(&self, id: i64) -> Result<Envelope> {
        let path = format!("/api/tasks/{}", id);
        self.capture_request("DELETE", &path, None).await;
        self.check_error().await?;
        self.call_count.lock().await.delete_task += 1;

        if let Some(envelope) = self.take_rejection().await {
            return Ok(envelope);
        }

        let mut tasks = self.tasks.lock().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(Self::not_found(id));
        }
        Ok(Self::success("Task deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_create_then_profile() {
        let mock = MockTasksApi::new();
        mock.create_task(&NewTask {
            title: "Buy milk".to_string(),
            ..NewTask::default()
        })
        .await
        .unwrap();

        let profile = mock.profile().await.unwrap();
        let tasks = profile.tasks.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockTasksApi::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.profile().await.is_err());
        assert!(mock.profile().await.is_ok());
        // The failed call is captured but not counted
        assert_eq!(mock.call_counts().await.profile, 1);
        assert_eq!(mock.captured_requests().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_update_unknown_task() {
        let mock = MockTasksApi::new();
        let env = mock
            .update_task(99, &TaskPatch::completion(true))
            .await
            .unwrap();
        assert!(!env.is_success());
    }
}
