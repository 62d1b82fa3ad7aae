use futures::executor::block_on;

use super::*;
use crate::config::Latency;
use crate::net::mock::MockSessionService;
use crate::net::service::SessionService;

// =============================================================
// BoardState defaults
// =============================================================

#[test]
fn board_state_default_has_seed_messages() {
    let state = BoardState::default();
    assert_eq!(state.messages.len(), BOARD_SEED.len());
    assert_eq!(state.messages[0].author, "Bessie_007");
    assert!(!state.sending);
    assert!(state.error.is_none());
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn blank_draft_is_ignored() {
    let mut state = BoardState::default();
    assert_eq!(state.begin_send("   "), None);
    assert!(!state.sending);
}

#[test]
fn begin_send_trims_and_marks_pending() {
    let mut state = BoardState::default();
    assert_eq!(state.begin_send("  moo  ").as_deref(), Some("moo"));
    assert!(state.sending);
    assert_eq!(state.begin_send("again"), None);
}

// =============================================================
// finish_send
// =============================================================

#[test]
fn accepted_message_is_appended_as_own() {
    let svc = MockSessionService::new(Latency { sign_in_ms: 0, api_ms: 0 });
    let mut state = BoardState::default();
    let text = state.begin_send("The tractor blinked.").unwrap();

    let result = block_on(svc.submit_message(&text));
    assert!(state.finish_send("admin@cow.com", text, result));

    let last = state.messages.last().unwrap();
    assert_eq!(last.author, "admin@cow.com");
    assert_eq!(last.content, "The tractor blinked.");
    assert!(last.own);
    assert!(last.id.starts_with("msg-"));
    assert!(!state.sending);
}

#[test]
fn rejected_message_is_not_appended() {
    let mut state = BoardState::default();
    let text = state.begin_send("moo").unwrap();
    let accepted = state.finish_send(
        "admin@cow.com",
        text,
        Err(ServiceError::Rejected { code: "CONTENT_TOO_LONG".to_owned(), message: "too long".to_owned() }),
    );
    assert!(!accepted);
    assert_eq!(state.messages.len(), BOARD_SEED.len());
    assert_eq!(state.error.as_deref(), Some("too long"));
    assert!(!state.sending);
}

#[test]
fn message_ids_are_unique() {
    let mut state = BoardState::default();
    for text in ["one", "two"] {
        let text = state.begin_send(text).unwrap();
        state.finish_send("me", text, Ok(()));
    }
    let n = state.messages.len();
    assert_ne!(state.messages[n - 1].id, state.messages[n - 2].id);
}

// =============================================================
// author_name
// =============================================================

#[test]
fn author_is_backend_session_username() {
    let svc = MockSessionService::new(Latency { sign_in_ms: 0, api_ms: 0 });
    block_on(svc.sign_in("admin@cow.com", "moo")).unwrap();
    assert_eq!(author_name(svc.current_session()), "admin@cow.com");
}

#[test]
fn author_without_session_is_you() {
    let svc = MockSessionService::new(Latency { sign_in_ms: 0, api_ms: 0 });
    assert_eq!(author_name(svc.current_session()), "You");
}
