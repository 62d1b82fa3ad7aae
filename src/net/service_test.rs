use futures::executor::block_on;

use super::*;
use crate::config::{BuildVars, Latency};
use crate::net::mock::{VALID_IDENTIFIER, VALID_SECRET};

fn mock_backend() -> Backend {
    Backend::Mock(MockSessionService::new(Latency { sign_in_ms: 0, api_ms: 0 }))
}

// =============================================================
// Backend::from_config
// =============================================================

#[test]
fn default_config_builds_mock_backend() {
    let backend = Backend::from_config(&AppConfig::default()).unwrap();
    assert!(backend.is_mock());
}

#[test]
fn http_config_builds_http_backend() {
    let config = AppConfig::from_vars(&BuildVars {
        backend: Some("http"),
        api_base_url: Some("https://api.example.test"),
        ..BuildVars::default()
    })
    .unwrap();
    let backend = Backend::from_config(&config).unwrap();
    assert!(!backend.is_mock());
}

#[test]
fn http_config_without_url_is_rejected() {
    let config = AppConfig { backend: BackendKind::Http, ..AppConfig::default() };
    assert_eq!(Backend::from_config(&config).unwrap_err(), ConfigError::MissingBaseUrl);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn dispatch_sign_in_and_out_through_backend() {
    let backend = mock_backend();
    let session = block_on(backend.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    assert_eq!(backend.current_session(), Some(session));

    block_on(backend.sign_out());
    assert!(backend.current_session().is_none());
}

#[test]
fn cloned_backend_shares_session() {
    let backend = mock_backend();
    let other = backend.clone();
    block_on(backend.sign_in(VALID_IDENTIFIER, VALID_SECRET)).unwrap();
    assert!(other.current_session().is_some());
}

#[test]
fn simulate_latency_resolves_off_browser() {
    block_on(simulate_latency(5_000));
}
