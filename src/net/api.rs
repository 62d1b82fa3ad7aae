//! HTTP backend for sign-in, sign-out, registration, and the message board.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`, each raced
//! against the configured timeout. Off-browser: every call fails with a
//! transport error since there is no fetch implementation to use.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies carry `{success: false, error, code}`. Auth-related codes
//! become [`ServiceError::Unauthorized`] so the login screen can show the
//! message verbatim; everything else is [`ServiceError::Rejected`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use super::service::SessionService;
#[cfg(any(test, feature = "csr"))]
use super::types::{ApiReply, SignInReply};
#[cfg(feature = "csr")]
use super::types::{MessageRequest, RegisterRequest, SignInRequest};
use super::types::{Acknowledgement, RegistrationAnswers, ServiceError, Session};

#[cfg(any(test, feature = "csr"))]
const UNAUTHORIZED_CODES: &[&str] =
    &["INVALID_CREDENTIALS", "ACCOUNT_NOT_ACTIVE", "MISSING_TOKEN", "INVALID_TOKEN", "TOKEN_BLACKLISTED"];

#[derive(Debug, Default)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
struct Credentials {
    token: Option<String>,
    session: Option<Session>,
}

/// Client for the real sign-in and submission endpoints.
///
/// The bearer token lives in memory only and is lost on reload.
#[derive(Clone, Debug)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct HttpSessionService {
    base_url: String,
    timeout_ms: u32,
    credentials: Arc<RwLock<Credentials>>,
}

impl HttpSessionService {
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self { base_url: base_url.into(), timeout_ms, credentials: Arc::default() }
    }

    #[cfg(feature = "csr")]
    fn endpoint(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    #[cfg(feature = "csr")]
    fn token(&self) -> Option<String> {
        self.credentials.read().unwrap_or_else(PoisonError::into_inner).token.clone()
    }

    fn set_credentials(&self, token: Option<String>, session: Option<Session>) {
        let mut creds = self.credentials.write().unwrap_or_else(PoisonError::into_inner);
        creds.token = token;
        creds.session = session;
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Classify a failed reply by its `code`, falling back to the HTTP status.
#[cfg(any(test, feature = "csr"))]
fn classify_failure(status: u16, code: Option<&str>, error: Option<&str>) -> ServiceError {
    let message = error.map_or_else(|| format!("request failed: {status}"), str::to_owned);
    match code {
        Some(code) if UNAUTHORIZED_CODES.contains(&code) => ServiceError::Unauthorized(message),
        Some(code) => ServiceError::Rejected { code: code.to_owned(), message },
        None if status == 401 || status == 403 => ServiceError::Unauthorized(message),
        None => ServiceError::Rejected { code: format!("HTTP_{status}"), message },
    }
}

/// Reply bodies that carry a success flag and optional failure details.
#[cfg(any(test, feature = "csr"))]
trait ReplyBody {
    fn succeeded(&self) -> bool;
    fn code(&self) -> Option<&str>;
    fn error(&self) -> Option<&str>;
}

#[cfg(any(test, feature = "csr"))]
impl ReplyBody for ApiReply {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(any(test, feature = "csr"))]
impl ReplyBody for SignInReply {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Turn a status and a possibly undecodable body into a result.
///
/// Non-2xx replies are always classified, using whatever details the body
/// yielded; a gateway page that is not JSON still maps by status. Decode
/// errors only surface for 2xx replies.
#[cfg(any(test, feature = "csr"))]
fn settle<T: ReplyBody>(status: u16, ok: bool, body: Result<T, ServiceError>) -> Result<T, ServiceError> {
    if !ok {
        let parsed = body.ok();
        let code = parsed.as_ref().and_then(T::code);
        let error = parsed.as_ref().and_then(T::error);
        return Err(classify_failure(status, code, error));
    }
    let reply = body?;
    if !reply.succeeded() {
        return Err(classify_failure(status, reply.code(), reply.error()));
    }
    Ok(reply)
}

/// Reject blank credentials before any request, as the backend would.
fn check_credentials(identifier: &str, secret: &str) -> Result<(), ServiceError> {
    if identifier.trim().is_empty() || secret.is_empty() {
        return Err(ServiceError::Rejected {
            code: "MISSING_CREDENTIALS".to_owned(),
            message: "Email and password are required".to_owned(),
        });
    }
    Ok(())
}

#[cfg(feature = "csr")]
async fn with_timeout<T>(
    ms: u32,
    fut: impl std::future::Future<Output = Result<T, ServiceError>>,
) -> Result<T, ServiceError> {
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(ms));
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ServiceError::Timeout { ms }),
    }
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
fn decode(e: gloo_net::Error) -> ServiceError {
    ServiceError::Decode(e.to_string())
}

#[cfg(feature = "csr")]
impl HttpSessionService {
    async fn post_api<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<ApiReply, ServiceError> {
        let mut builder = gloo_net::http::Request::post(&self.endpoint(path));
        if let Some(token) = self.token() {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let request = builder.json(body).map_err(decode)?;
        let fut = async move {
            let resp = request.send().await.map_err(transport)?;
            let (status, ok) = (resp.status(), resp.ok());
            settle(status, ok, resp.json::<ApiReply>().await.map_err(decode))
        };
        with_timeout(self.timeout_ms, fut).await
    }
}

#[async_trait(?Send)]
impl SessionService for HttpSessionService {
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session, ServiceError> {
        check_credentials(identifier, secret)?;
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(&self.endpoint("/signin"))
                .json(&SignInRequest { email: identifier.trim(), password: secret })
                .map_err(decode)?;
            let fut = async move {
                let resp = request.send().await.map_err(transport)?;
                let (status, ok) = (resp.status(), resp.ok());
                match settle(status, ok, resp.json::<SignInReply>().await.map_err(decode))? {
                    SignInReply { token, user: Some(user), .. } => Ok((token, Session::from(user))),
                    SignInReply { user: None, .. } => Err(ServiceError::Decode("sign-in reply has no user".to_owned())),
                }
            };
            let (token, session) = with_timeout(self.timeout_ms, fut).await?;
            self.set_credentials(token, Some(session.clone()));
            log::info!("signed in as {}", session.username);
            Ok(session)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ServiceError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn sign_out(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(token) = self.token() {
                let result = gloo_net::http::Request::post(&self.endpoint("/signout"))
                    .header("Authorization", &bearer(&token))
                    .send();
                match with_timeout(self.timeout_ms, async { result.await.map_err(transport) }).await {
                    Ok(resp) if resp.ok() => {}
                    Ok(resp) => log::warn!("sign-out returned {}; dropping session anyway", resp.status()),
                    Err(e) => log::warn!("sign-out failed ({}): {e}; dropping session anyway", e.error_code()),
                }
            }
        }
        self.set_credentials(None, None);
    }

    async fn submit_registration(&self, answers: &RegistrationAnswers) -> Result<Acknowledgement, ServiceError> {
        #[cfg(feature = "csr")]
        {
            let reply = self.post_api("/register", &RegisterRequest { answers }).await?;
            Ok(Acknowledgement { message: reply.message.unwrap_or_default(), debug_info: reply.debug_info })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = answers;
            Err(ServiceError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn submit_message(&self, text: &str) -> Result<(), ServiceError> {
        #[cfg(feature = "csr")]
        {
            self.post_api("/messages", &MessageRequest { content: text }).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(ServiceError::Transport("not available outside the browser".to_owned()))
        }
    }

    fn current_session(&self) -> Option<Session> {
        self.credentials.read().unwrap_or_else(PoisonError::into_inner).session.clone()
    }
}
