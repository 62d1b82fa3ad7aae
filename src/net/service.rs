//! Session service seam and backend dispatch.
//!
//! DESIGN
//! ======
//! Views talk to a `Backend`, chosen once when the app is composed. The
//! `Backend` enum dispatches to the in-memory mock or the HTTP client, so the
//! real integration can be swapped in without touching view logic.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use async_trait::async_trait;

use super::api::HttpSessionService;
use super::mock::MockSessionService;
use super::types::{Acknowledgement, RegistrationAnswers, ServiceError, Session};
use crate::config::{AppConfig, BackendKind, ConfigError};

/// Sign-in and submission operations offered to the views.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait SessionService {
    /// Authenticate and store the resulting session.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Unauthorized`] for rejected credentials.
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session, ServiceError>;

    /// Drop the stored session. Always completes.
    async fn sign_out(&self);

    /// Send registration answers for Council review.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission was not accepted.
    async fn submit_registration(&self, answers: &RegistrationAnswers) -> Result<Acknowledgement, ServiceError>;

    /// Post a message-board entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the message was not accepted.
    async fn submit_message(&self, text: &str) -> Result<(), ServiceError>;

    /// The session stored by the last successful sign-in, if any.
    fn current_session(&self) -> Option<Session>;
}

// =============================================================================
// BACKEND DISPATCH
// =============================================================================

/// Concrete service selected at composition time.
#[derive(Clone, Debug)]
pub enum Backend {
    Mock(MockSessionService),
    Http(HttpSessionService),
}

impl Backend {
    /// Build the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the http backend is selected without a base URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        match config.backend {
            BackendKind::Mock => Ok(Self::Mock(MockSessionService::new(config.latency))),
            BackendKind::Http => {
                let base_url = config.api_base_url.clone().ok_or(ConfigError::MissingBaseUrl)?;
                Ok(Self::Http(HttpSessionService::new(base_url, config.request_timeout_ms)))
            }
        }
    }

    /// Whether this backend is the local stand-in.
    #[must_use]
    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock(_))
    }
}

#[async_trait(?Send)]
impl SessionService for Backend {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session, ServiceError> {
        match self {
            Self::Mock(s) => s.sign_in(identifier, secret).await,
            Self::Http(s) => s.sign_in(identifier, secret).await,
        }
    }

    async fn sign_out(&self) {
        match self {
            Self::Mock(s) => s.sign_out().await,
            Self::Http(s) => s.sign_out().await,
        }
    }

    async fn submit_registration(&self, answers: &RegistrationAnswers) -> Result<Acknowledgement, ServiceError> {
        match self {
            Self::Mock(s) => s.submit_registration(answers).await,
            Self::Http(s) => s.submit_registration(answers).await,
        }
    }

    async fn submit_message(&self, text: &str) -> Result<(), ServiceError> {
        match self {
            Self::Mock(s) => s.submit_message(text).await,
            Self::Http(s) => s.submit_message(text).await,
        }
    }

    fn current_session(&self) -> Option<Session> {
        match self {
            Self::Mock(s) => s.current_session(),
            Self::Http(s) => s.current_session(),
        }
    }
}

// =============================================================================
// TIMERS
// =============================================================================

/// Wait `ms` milliseconds in the browser. Resolves immediately off-browser.
#[allow(clippy::unused_async)]
pub(crate) async fn simulate_latency(ms: u32) {
    #[cfg(feature = "csr")]
    {
        if ms > 0 {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
