//! Auth-session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the router to gate the dashboard and by the nav bar to pick which
//! entries to show. Written only by the login screen and sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{ServiceError, Session};

/// Authentication state tracking the current user and pending sign-in.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Mark a sign-in as pending. Returns `false` if one is already running.
    pub fn begin_sign_in(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a sign-in outcome. Failures leave the current user untouched.
    ///
    /// # Errors
    ///
    /// Hands back the service error so the caller can show it.
    pub fn finish_sign_in(&mut self, result: Result<Session, ServiceError>) -> Result<(), ServiceError> {
        self.loading = false;
        let session = result?;
        self.user = Some(session);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
