#[cfg(not(feature = "csr"))]
use futures::executor::block_on;

use super::*;

// =============================================================
// URL + header helpers
// =============================================================

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("https://api.test/prod/", "/signin"), "https://api.test/prod/signin");
    assert_eq!(endpoint("https://api.test", "messages"), "https://api.test/messages");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

// =============================================================
// classify_failure
// =============================================================

#[test]
fn invalid_credentials_code_is_unauthorized() {
    let err = classify_failure(
        401,
        Some("INVALID_CREDENTIALS"),
        Some("User not authorized or account pending Council approval"),
    );
    assert_eq!(err, ServiceError::Unauthorized("User not authorized or account pending Council approval".to_owned()));
}

#[test]
fn inactive_account_is_unauthorized() {
    let err = classify_failure(401, Some("ACCOUNT_NOT_ACTIVE"), Some("Account is pending. Please contact the Council."));
    assert!(matches!(err, ServiceError::Unauthorized(_)));
}

#[test]
fn token_codes_are_unauthorized() {
    for code in ["MISSING_TOKEN", "INVALID_TOKEN", "TOKEN_BLACKLISTED"] {
        assert!(matches!(classify_failure(401, Some(code), None), ServiceError::Unauthorized(_)), "{code}");
    }
}

#[test]
fn other_codes_are_rejected_with_message() {
    let err = classify_failure(400, Some("CONTENT_TOO_LONG"), Some("Message content exceeds 500 characters"));
    assert_eq!(
        err,
        ServiceError::Rejected {
            code: "CONTENT_TOO_LONG".to_owned(),
            message: "Message content exceeds 500 characters".to_owned()
        }
    );
}

#[test]
fn missing_code_falls_back_to_status() {
    assert!(matches!(classify_failure(403, None, None), ServiceError::Unauthorized(_)));
    assert_eq!(
        classify_failure(502, None, None),
        ServiceError::Rejected { code: "HTTP_502".to_owned(), message: "request failed: 502".to_owned() }
    );
}

// =============================================================
// settle
// =============================================================

fn undecodable<T>() -> Result<T, ServiceError> {
    Err(ServiceError::Decode("expected value at line 1 column 1".to_owned()))
}

#[test]
fn gateway_error_without_json_body_is_classified_by_status() {
    let err = settle::<ApiReply>(502, false, undecodable()).unwrap_err();
    assert_eq!(err, ServiceError::Rejected { code: "HTTP_502".to_owned(), message: "request failed: 502".to_owned() });
}

#[test]
fn unauthorized_status_without_body_is_unauthorized() {
    let err = settle::<SignInReply>(401, false, undecodable()).unwrap_err();
    assert_eq!(err, ServiceError::Unauthorized("request failed: 401".to_owned()));
}

#[test]
fn failure_body_details_are_used_when_present() {
    let body = ApiReply {
        success: false,
        error: Some("Message content exceeds 500 characters".to_owned()),
        code: Some("CONTENT_TOO_LONG".to_owned()),
        ..ApiReply::default()
    };
    let err = settle(400, false, Ok(body)).unwrap_err();
    assert_eq!(err.error_code(), "E_REJECTED");
    assert_eq!(err.to_string(), "Message content exceeds 500 characters");
}

#[test]
fn ok_status_with_unsuccessful_body_is_classified() {
    let body = ApiReply { success: false, code: Some("INVALID_TOKEN".to_owned()), ..ApiReply::default() };
    assert!(matches!(settle(200, true, Ok(body)), Err(ServiceError::Unauthorized(_))));
}

#[test]
fn ok_status_with_undecodable_body_is_decode_error() {
    assert_eq!(settle::<ApiReply>(200, true, undecodable()).unwrap_err().error_code(), "E_DECODE");
}

#[test]
fn ok_status_with_successful_body_passes_through() {
    let body = ApiReply { success: true, message: Some("ok".to_owned()), ..ApiReply::default() };
    assert_eq!(settle(200, true, Ok(body.clone())), Ok(body));
}

// =============================================================
// check_credentials
// =============================================================

#[test]
fn blank_credentials_are_rejected_before_request() {
    let err = check_credentials("  ", "moo").unwrap_err();
    assert_eq!(err.to_string(), "Email and password are required");
    assert!(check_credentials("admin@cow.com", "").is_err());
    assert!(check_credentials("admin@cow.com", "moo").is_ok());
}

// =============================================================
// Off-browser behavior
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn sign_in_off_browser_is_transport_error() {
    let svc = HttpSessionService::new("https://api.test", 1000);
    let err = block_on(svc.sign_in("admin@cow.com", "moo")).unwrap_err();
    assert_eq!(err.error_code(), "E_TRANSPORT");
    assert!(svc.current_session().is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn sign_out_always_clears_local_session() {
    let svc = HttpSessionService::new("https://api.test", 1000);
    svc.set_credentials(
        Some("jwt".to_owned()),
        Some(Session {
            username: "Bessie_007".to_owned(),
            user_id: "u-1".to_owned(),
            email: "bessie@cow.com".to_owned(),
            clearance: "LEVEL 2".to_owned(),
        }),
    );
    assert!(svc.current_session().is_some());

    block_on(svc.sign_out());
    assert!(svc.current_session().is_none());
}
