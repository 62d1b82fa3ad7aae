//! In-memory stand-in for the sign-in and submission backend.
//!
//! Every call waits a fixed delay and answers with a canned response. Only
//! one credential pair is accepted. Nothing is delivered anywhere; swap in
//! [`HttpSessionService`](super::api::HttpSessionService) for a real backend.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use super::service::{SessionService, simulate_latency};
use super::types::{
    Acknowledgement, ApiReply, ApiRoute, DEFAULT_CLEARANCE, MessageRequest, RegisterRequest, RegistrationAnswers,
    ServiceError, Session,
};
use crate::config::Latency;

pub const VALID_IDENTIFIER: &str = "admin@cow.com";
pub const VALID_SECRET: &str = "moo";
pub const MOCK_USER_ID: &str = "123-cow-id";
pub const UNAUTHORIZED_MESSAGE: &str = "User not authorized or account pending Council approval.";
pub const REGISTRATION_MESSAGE: &str = "Registration received. The Council will review your answers.";
pub const REGISTRATION_DEBUG_INFO: &str = "Email sent via AWS SES to admin@cowswithak.com";

/// Mock backend holding the current session in memory.
///
/// Clones share the same session slot.
#[derive(Clone, Debug, Default)]
pub struct MockSessionService {
    session: Arc<RwLock<Option<Session>>>,
    latency: Latency,
    #[cfg(test)]
    waits: Arc<RwLock<Vec<u32>>>,
}

impl MockSessionService {
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self { latency, ..Self::default() }
    }

    /// Every simulated wait goes through here.
    async fn pause(&self, ms: u32) {
        #[cfg(test)]
        self.waits.write().unwrap_or_else(PoisonError::into_inner).push(ms);
        simulate_latency(ms).await;
    }

    /// Single entry point for the two API operations.
    async fn post(&self, route: ApiRoute, body: serde_json::Value) -> ApiReply {
        log::debug!("[mock api] POST {} {body}", route.path());
        self.pause(self.latency.api_ms).await;
        match route {
            ApiRoute::Register => ApiReply {
                success: true,
                message: Some(REGISTRATION_MESSAGE.to_owned()),
                debug_info: Some(REGISTRATION_DEBUG_INFO.to_owned()),
                ..ApiReply::default()
            },
            ApiRoute::Messages => ApiReply { success: true, ..ApiReply::default() },
        }
    }

    fn store(&self, session: Option<Session>) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

#[async_trait(?Send)]
impl SessionService for MockSessionService {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session, ServiceError> {
        self.pause(self.latency.sign_in_ms).await;
        if identifier != VALID_IDENTIFIER || secret != VALID_SECRET {
            log::warn!("mock sign-in rejected for {identifier}");
            return Err(ServiceError::Unauthorized(UNAUTHORIZED_MESSAGE.to_owned()));
        }
        let session = Session {
            username: identifier.to_owned(),
            user_id: MOCK_USER_ID.to_owned(),
            email: identifier.to_owned(),
            clearance: DEFAULT_CLEARANCE.to_owned(),
        };
        self.store(Some(session.clone()));
        log::info!("mock sign-in accepted for {identifier}");
        Ok(session)
    }

    async fn sign_out(&self) {
        self.store(None);
    }

    async fn submit_registration(&self, answers: &RegistrationAnswers) -> Result<Acknowledgement, ServiceError> {
        let body = serde_json::to_value(RegisterRequest { answers }).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let reply = self.post(ApiRoute::Register, body).await;
        Ok(Acknowledgement { message: reply.message.unwrap_or_default(), debug_info: reply.debug_info })
    }

    async fn submit_message(&self, text: &str) -> Result<(), ServiceError> {
        let body =
            serde_json::to_value(MessageRequest { content: text }).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let _ = self.post(ApiRoute::Messages, body).await;
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
