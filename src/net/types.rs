//! Session records, API payloads, and service errors.
//!
//! Shared by the mock and HTTP backends so the views never know which one
//! answered a call.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by session and submission calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Credentials rejected or account not allowed in. Displays verbatim.
    #[error("{0}")]
    Unauthorized(String),

    /// The backend refused the request for a non-auth reason.
    #[error("{message}")]
    Rejected { code: String, message: String },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// No response arrived within the configured timeout.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u32 },

    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Stable short code for logging.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "E_UNAUTHORIZED",
            Self::Rejected { .. } => "E_REJECTED",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Timeout { .. } => "E_TIMEOUT",
            Self::Decode(_) => "E_DECODE",
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// The signed-in user for the lifetime of the page load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub user_id: String,
    pub email: String,
    pub clearance: String,
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Registration answers keyed by question id (`q1`..`q4`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationAnswers(pub BTreeMap<String, String>);

impl RegistrationAnswers {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }
}

/// Acknowledgement returned for an accepted registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
    pub debug_info: Option<String>,
}

/// The two operations reachable through the single API entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiRoute {
    Register,
    Messages,
}

impl ApiRoute {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Messages => "/messages",
        }
    }
}

/// Plain success/message payload returned by an API post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// =============================================================================
// WIRE
// =============================================================================

/// `POST /signin` request body.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /signin` response body, success or failure.
#[derive(Debug, Deserialize)]
pub struct SignInReply {
    #[serde(default)]
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<WireUser>,
    pub error: Option<String>,
    pub code: Option<String>,
}

/// User record as returned by the sign-in endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUser {
    pub user_id: String,
    pub email: String,
    pub username: Option<String>,
    pub clearance_level: Option<String>,
}

impl From<WireUser> for Session {
    fn from(user: WireUser) -> Self {
        Self {
            username: user.username.unwrap_or_else(|| user.email.clone()),
            user_id: user.user_id,
            email: user.email,
            clearance: user.clearance_level.unwrap_or_else(|| DEFAULT_CLEARANCE.to_owned()),
        }
    }
}

/// Clearance assigned when the backend does not report one.
pub const DEFAULT_CLEARANCE: &str = "LEVEL 1";

/// `POST /register` request body: the questionnaire answers keyed by
/// question id, nothing else.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub answers: &'a RegistrationAnswers,
}

/// `POST /messages` request body.
#[derive(Debug, Serialize)]
pub struct MessageRequest<'a> {
    pub content: &'a str,
}
