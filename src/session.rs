//! Session utility: login state, logout and token inspection

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use reqwest::Client as HttpClient;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::error::Result;
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStore, USER_ID_KEY};
use crate::view::TaskView;

/// Where logout sends the user
pub const HOME_LOCATION: &str = "index.html";

/// Path of the server-side logout endpoint
pub const LOGOUT_PATH: &str = "/api/logout";

/// Host capability for leaving the current page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// The persisted session: a bearer token plus the user id it belongs to.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored bearer token. An empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY).filter(|id| !id.is_empty())
    }

    /// Persist a freshly issued token
    pub fn store_login(&self, token: &str, user_id: Option<i64>) -> Result<()> {
        self.store.set(AUTH_TOKEN_KEY, token)?;
        match user_id {
            Some(id) => self.store.set(USER_ID_KEY, &id.to_string())?,
            None => self.store.remove(USER_ID_KEY)?,
        }
        Ok(())
    }

    /// Remove both session keys. Both removals are attempted even if one fails.
    pub fn clear(&self) -> Result<()> {
        let token = self.store.remove(AUTH_TOKEN_KEY);
        let user = self.store.remove(USER_ID_KEY);
        token.and(user)
    }

    /// Report whether a token is stored and show the matching navigation.
    ///
    /// Views without navigation regions ignore the toggle.
    pub fn check_login_status(&self, view: &mut dyn TaskView) -> bool {
        let logged_in = self.token().is_some();
        view.toggle_navigation(logged_in);
        logged_in
    }

    /// Log out: notify the server if possible, clear the session, go home.
    ///
    /// The server call is best-effort; its failure is logged and never stops
    /// the local logout.
    pub async fn logout(&self, http: &HttpClient, base_url: &str, navigator: &dyn Navigator) {
        log::info!("Logging out");

        if let Some(token) = self.token() {
            let url = format!("{}{}", base_url, LOGOUT_PATH);
            match http
                .post(&url)
                .header(AUTHORIZATION, format!("Bearer {}", token))
                .send()
                .await
            {
                Ok(resp) => log::debug!("Logout endpoint answered {}", resp.status()),
                Err(e) => log::warn!("Logout API error: {}", e),
            }
        }

        if let Err(e) = self.clear() {
            log::error!("Failed to clear session: {}", e);
        }

        navigator.navigate(HOME_LOCATION);
    }
}

/// Claims carried in the token payload. Decoded for display only, never verified.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a `header.payload.signature` token.
    ///
    /// Returns `None` for anything that is not a JWT with a JSON payload.
    pub fn decode(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let payload = URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .ok()?;
        serde_json::from_slice(&payload).ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}

/// Navigator that remembers where it was sent
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        self.visited.lock().unwrap().push(location.to_string());
    }
}
