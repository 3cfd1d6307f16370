//! Task service API client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api::{AuthApi, TasksApi};
use super::models::{
    Credentials, Envelope, LoginResponse, NewTask, ProfileResponse, Registration, TaskPatch,
};
use crate::error::{ApiError, Error, Result};
use crate::session::{Navigator, Session};

/// Endpoints that never carry the bearer token
const PUBLIC_ENDPOINTS: [&str; 2] = ["/api/login", "/api/register"];

/// Method, extra headers and JSON body of one API call
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// A request with a JSON body
    pub fn with_json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self> {
        Ok(Self {
            method,
            headers: Vec::new(),
            body: Some(serde_json::to_value(body)?),
        })
    }

    /// Add a caller header. Caller headers override the defaults.
    #[cfg(test)]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Whether a request URL should carry the bearer token
fn requires_auth(url: &str) -> bool {
    !PUBLIC_ENDPOINTS.iter().any(|p| url.contains(p))
}

/// HTTP client for the task service.
///
/// All requests go through [`TaskClient::call`], which injects headers and
/// enforces the 401 policy: an unauthorized answer logs the user out before
/// the error is returned.
pub struct TaskClient {
    http: HttpClient,
    base_url: String,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl TaskClient {
    /// Create a client for `base_url` (scheme + host, no trailing slash).
    ///
    /// No client-side timeout is configured; the transport default applies.
    pub fn new(base_url: &str, session: Session, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let http = HttpClient::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one API call and decode the JSON body.
    ///
    /// Failures of every kind are logged and returned; nothing is retried.
    pub async fn call<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        let method = options.method.clone();
        match self.call_inner(path, options).await {
            Ok(data) => Ok(data),
            Err(e) => {
                log::error!("API call failed: {} {}: {}", method, path, e);
                Err(e)
            }
        }
    }

    fn build_headers(&self, url: &str, extra: &[(String, String)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Other(format!("Invalid header name {}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Other(format!("Invalid header value: {}", e)))?;
            headers.insert(name, value);
        }

        if requires_auth(url) {
            if let Some(token) = self.session.token() {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| Error::Other(format!("Invalid token: {}", e)))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }

    async fn call_inner<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let headers = self.build_headers(&url, &options.headers)?;

        log::debug!("{} {}", options.method, url);

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            log::warn!("Token expired or invalid, logging out");
            self.logout().await;
            return Err(ApiError::Unauthorized.into());
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        let parsed = serde_json::from_str::<serde_json::Value>(&text);

        if !status.is_success() {
            let message = parsed
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
            return Err(ApiError::status(status.as_u16(), message).into());
        }

        let value = parsed.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Unexpected response shape: {}", e)).into()
        })
    }
}

#[async_trait]
impl AuthApi for TaskClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.call(
            "/api/login",
            RequestOptions::with_json(Method::POST, credentials)?,
        )
        .await
    }

    async fn register(&self, registration: &Registration) -> Result<Envelope> {
        self.call(
            "/api/register",
            RequestOptions::with_json(Method::POST, registration)?,
        )
        .await
    }

    async fn logout(&self) {
        self.session
            .logout(&self.http, &self.base_url, self.navigator.as_ref())
            .await;
    }
}

#[async_trait]
impl TasksApi for TaskClient {
    async fn profile(&self) -> Result<ProfileResponse> {
        self.call("/api/profile", RequestOptions::get()).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Envelope> {
        self.call("/api/tasks", RequestOptions::with_json(Method::POST, task)?)
            .await
    }

    async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Envelope> {
        let path = format!("/api/tasks/{}", id);
        self.call(&path, RequestOptions::with_json(Method::PATCH, patch)?)
            .await
    }

    async fn delete_task(&self, id: i64) -> Result<Envelope> {
        let path = format!("/api/tasks/{}", id);
        self.call(&path, RequestOptions::delete()).await
    }
}
