//! Application configuration captured at build time.
//!
//! DESIGN
//! ======
//! A client-only bundle has no process environment at runtime, so values are
//! read with `option_env!` when the crate is compiled. Parsing lives in small
//! `parse_*` helpers that take `Option<&str>` so they can be tested directly.

pub const DEFAULT_SIGN_IN_DELAY_MS: u32 = 800;
pub const DEFAULT_API_DELAY_MS: u32 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Errors raised while parsing build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown PASTURE_BACKEND: {0}")]
    UnknownBackend(String),

    #[error("PASTURE_API_BASE_URL is required for the http backend")]
    MissingBaseUrl,

    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Mock,
    Http,
}

/// Artificial latency used by the mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub sign_in_ms: u32,
    pub api_ms: u32,
}

impl Default for Latency {
    fn default() -> Self {
        Self { sign_in_ms: DEFAULT_SIGN_IN_DELAY_MS, api_ms: DEFAULT_API_DELAY_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub api_base_url: Option<String>,
    pub latency: Latency,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Mock,
            api_base_url: None,
            latency: Latency::default(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build config from the variables visible when the crate was compiled.
    ///
    /// - `PASTURE_BACKEND`: `mock` (default) or `http`
    /// - `PASTURE_API_BASE_URL`: required for `http`
    /// - `PASTURE_SIGN_IN_DELAY_MS`: default 800
    /// - `PASTURE_API_DELAY_MS`: default 1000
    /// - `PASTURE_REQUEST_TIMEOUT_MS`: default 10000
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(&BuildVars {
            backend: option_env!("PASTURE_BACKEND"),
            api_base_url: option_env!("PASTURE_API_BASE_URL"),
            sign_in_delay_ms: option_env!("PASTURE_SIGN_IN_DELAY_MS"),
            api_delay_ms: option_env!("PASTURE_API_DELAY_MS"),
            request_timeout_ms: option_env!("PASTURE_REQUEST_TIMEOUT_MS"),
        })
    }

    /// Build config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but malformed, or if the http
    /// backend is selected without a base URL.
    pub fn from_vars(vars: &BuildVars<'_>) -> Result<Self, ConfigError> {
        let backend = parse_backend(vars.backend)?;
        let api_base_url = parse_base_url(vars.api_base_url);
        if backend == BackendKind::Http && api_base_url.is_none() {
            return Err(ConfigError::MissingBaseUrl);
        }
        let latency = Latency {
            sign_in_ms: parse_ms("PASTURE_SIGN_IN_DELAY_MS", vars.sign_in_delay_ms, DEFAULT_SIGN_IN_DELAY_MS)?,
            api_ms: parse_ms("PASTURE_API_DELAY_MS", vars.api_delay_ms, DEFAULT_API_DELAY_MS)?,
        };
        let request_timeout_ms =
            parse_ms("PASTURE_REQUEST_TIMEOUT_MS", vars.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS)?;

        Ok(Self { backend, api_base_url, latency, request_timeout_ms })
    }
}

/// Raw configuration values before parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildVars<'a> {
    pub backend: Option<&'a str>,
    pub api_base_url: Option<&'a str>,
    pub sign_in_delay_ms: Option<&'a str>,
    pub api_delay_ms: Option<&'a str>,
    pub request_timeout_ms: Option<&'a str>,
}

fn parse_backend(raw: Option<&str>) -> Result<BackendKind, ConfigError> {
    match raw.map(str::trim).unwrap_or("mock") {
        "" | "mock" => Ok(BackendKind::Mock),
        "http" => Ok(BackendKind::Http),
        other => Err(ConfigError::UnknownBackend(other.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Option<String> {
    raw.map(|v| v.trim().trim_end_matches('/'))
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn parse_ms(var: &'static str, raw: Option<&str>, default: u32) -> Result<u32, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
