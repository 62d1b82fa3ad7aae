//! Registration form draft and submission status.
//!
//! The draft lives only as long as the register screen; it is dropped on a
//! successful submit or when the visitor navigates away.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::content::Question;
use crate::net::types::{Acknowledgement, RegistrationAnswers, ServiceError};

/// Answers typed so far plus the consent checkbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    answers: RegistrationAnswers,
    pub consent: bool,
}

impl RegistrationDraft {
    pub fn set_answer(&mut self, id: &str, value: String) {
        self.answers.0.insert(id.to_owned(), value);
    }

    #[must_use]
    pub fn answer(&self, id: &str) -> &str {
        self.answers.get(id).unwrap_or_default()
    }

    /// Every question has a non-blank answer and consent is given.
    #[must_use]
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        self.consent && questions.iter().all(|q| !self.answer(q.id).trim().is_empty())
    }

    #[must_use]
    pub fn answers(&self) -> &RegistrationAnswers {
        &self.answers
    }
}

/// `idle -> submitting -> success | error`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success(Acknowledgement),
    Error(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Move to `Submitting`. Returns `false` if already submitting or done.
    pub fn begin(&mut self) -> bool {
        match self {
            Self::Idle | Self::Error(_) => {
                *self = Self::Submitting;
                true
            }
            Self::Submitting | Self::Success(_) => false,
        }
    }

    pub fn finish(&mut self, result: Result<Acknowledgement, ServiceError>) {
        *self = match result {
            Ok(ack) => Self::Success(ack),
            Err(e) => {
                log::warn!("registration failed ({}): {e}", e.error_code());
                Self::Error(e.to_string())
            }
        };
    }

    /// Label for the submit button.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() { "TRANSMITTING..." } else { "SUBMIT APPLICATION" }
    }
}
