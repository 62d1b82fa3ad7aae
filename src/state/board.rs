#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::content::BOARD_SEED;
use crate::net::types::{ServiceError, Session};

/// Message-board state for the dashboard's board tab.
///
/// The service never stores posts; accepted messages are only echoed here
/// and vanish when the dashboard unmounts.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub messages: Vec<BoardMessage>,
    pub sending: bool,
    pub error: Option<String>,
}

impl Default for BoardState {
    fn default() -> Self {
        let messages = BOARD_SEED
            .iter()
            .enumerate()
            .map(|(i, m)| BoardMessage {
                id: format!("seed-{i}"),
                author: m.author.to_owned(),
                content: m.content.to_owned(),
                own: m.own,
            })
            .collect();
        Self { messages, sending: false, error: None }
    }
}

/// A single board message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardMessage {
    pub id: String,
    pub author: String,
    pub content: String,
    pub own: bool,
}

impl BoardState {
    /// Start sending `draft`. Returns the trimmed text, or `None` if the draft
    /// is blank or a send is already pending.
    pub fn begin_send(&mut self, draft: &str) -> Option<String> {
        let text = draft.trim();
        if text.is_empty() || self.sending {
            return None;
        }
        self.sending = true;
        self.error = None;
        Some(text.to_owned())
    }

    /// Apply the service outcome. Returns `true` if the message was accepted.
    pub fn finish_send(&mut self, author: &str, text: String, result: Result<(), ServiceError>) -> bool {
        self.sending = false;
        match result {
            Ok(()) => {
                self.messages.push(BoardMessage {
                    id: format!("msg-{}", uuid::Uuid::new_v4()),
                    author: author.to_owned(),
                    content: text,
                    own: true,
                });
                true
            }
            Err(e) => {
                log::warn!("message not sent ({}): {e}", e.error_code());
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

/// Name shown on a posted message: whoever the backend is signed in as.
#[must_use]
pub fn author_name(session: Option<Session>) -> String {
    session.map_or_else(|| "You".to_owned(), |s| s.username)
}
