use futures::executor::block_on;

use super::*;

fn instant() -> MockSessionService {
    MockSessionService::new(Latency { sign_in_ms: 0, api_ms: 0 })
}

fn full_answers() -> RegistrationAnswers {
    let mut answers = RegistrationAnswers::default();
    for (id, value) in [("q1", "Kentucky Bluegrass"), ("q2", "Four (Correct)"), ("q3", "divine"), ("q4", "Sun and clover.")] {
        answers.0.insert(id.to_owned(), value.to_owned());
    }
    answers
}

fn waits(svc: &MockSessionService) -> Vec<u32> {
    svc.waits.read().unwrap().clone()
}

// =============================================================
// simulated latency
// =============================================================

#[test]
fn sign_in_waits_sign_in_delay() {
    let svc = MockSessionService::default();
    block_on(svc.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    assert_eq!(waits(&svc), [800]);
}

#[test]
fn rejected_sign_in_still_waits() {
    let svc = MockSessionService::default();
    let _ = block_on(svc.sign_in(VALID_IDENTIFIER, "baa"));
    assert_eq!(waits(&svc), [800]);
}

#[test]
fn api_posts_wait_api_delay() {
    let svc = MockSessionService::default();
    block_on(svc.submit_registration(&full_answers())).unwrap();
    block_on(svc.submit_message("moo")).unwrap();
    assert_eq!(waits(&svc), [1000, 1000]);
}

#[test]
fn configured_latency_is_used_per_operation() {
    let svc = MockSessionService::new(Latency { sign_in_ms: 5, api_ms: 7 });
    block_on(svc.submit_message("moo")).unwrap();
    block_on(svc.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    assert_eq!(waits(&svc), [7, 5]);
}

#[test]
fn sign_out_does_not_wait() {
    let svc = MockSessionService::default();
    block_on(svc.sign_out());
    assert!(waits(&svc).is_empty());
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn valid_pair_yields_session_with_identifier_as_username() {
    let svc = instant();
    let session = block_on(svc.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    assert_eq!(session.username, VALID_IDENTIFIER);
    assert_eq!(session.user_id, MOCK_USER_ID);
    assert_eq!(svc.current_session(), Some(session));
}

#[test]
fn wrong_secret_is_unauthorized_and_leaves_session_unset() {
    let svc = instant();
    let err = block_on(svc.sign_in(VALID_IDENTIFIER, "baa")).unwrap_err();
    assert_eq!(err, ServiceError::Unauthorized(UNAUTHORIZED_MESSAGE.to_owned()));
    assert!(svc.current_session().is_none());
}

#[test]
fn wrong_identifier_is_unauthorized() {
    let svc = instant();
    let err = block_on(svc.sign_in("sheep@farm.com", VALID_SECRET)).unwrap_err();
    assert_eq!(err.to_string(), UNAUTHORIZED_MESSAGE);
}

#[test]
fn identifier_match_is_exact() {
    let svc = instant();
    assert!(block_on(svc.sign_in("ADMIN@COW.COM", VALID_SECRET)).is_err());
    assert!(block_on(svc.sign_in(" admin@cow.com", VALID_SECRET)).is_err());
    assert!(block_on(svc.sign_in("", "")).is_err());
}

#[test]
fn failed_sign_in_keeps_existing_session() {
    let svc = instant();
    let session = block_on(svc.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    let _ = block_on(svc.sign_in(VALID_IDENTIFIER, "wrong"));
    assert_eq!(svc.current_session(), Some(session));
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_clears_session() {
    let svc = instant();
    block_on(svc.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    block_on(svc.sign_out());
    assert!(svc.current_session().is_none());
}

#[test]
fn sign_out_without_session_is_fine() {
    let svc = instant();
    block_on(svc.sign_out());
    assert!(svc.current_session().is_none());
}

// =============================================================
// submissions
// =============================================================

#[test]
fn registration_always_acknowledged() {
    let svc = instant();
    let ack = block_on(svc.submit_registration(&full_answers())).unwrap();
    assert_eq!(ack.message, REGISTRATION_MESSAGE);
    assert_eq!(ack.debug_info.as_deref(), Some(REGISTRATION_DEBUG_INFO));
}

#[test]
fn registration_does_not_validate_answers() {
    let svc = instant();
    assert!(block_on(svc.submit_registration(&RegistrationAnswers::default())).is_ok());
}

#[test]
fn message_always_succeeds_without_session() {
    let svc = instant();
    assert_eq!(block_on(svc.submit_message("Stick to the code words.")), Ok(()));
    assert!(svc.current_session().is_none());
}

#[test]
fn post_routes_return_canned_replies() {
    let svc = instant();
    let reply = block_on(svc.post(ApiRoute::Messages, serde_json::json!({ "content": "moo" })));
    assert!(reply.success);
    assert!(reply.message.is_none());

    let reply = block_on(svc.post(ApiRoute::Register, serde_json::json!({})));
    assert_eq!(reply.message.as_deref(), Some(REGISTRATION_MESSAGE));
}
