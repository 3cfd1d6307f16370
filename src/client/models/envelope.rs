//! Response envelope shared by every endpoint

use serde::{Deserialize, Serialize};

/// Value of `status` that marks a successful operation
pub const SUCCESS_STATUS: &str = "success";

/// `{status, message?}` carried by every response body.
///
/// Success is decided by `status`, independent of the HTTP status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}
