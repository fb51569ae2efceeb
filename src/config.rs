//! Gateway configuration.
//!
//! The gateway never reads process state on its own. Build a `GatewayConfig`
//! explicitly, or call [`GatewayConfig::from_env`] once at startup.

use crate::error::HttpError;
use crate::network::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_API_URL, DEMO_API_KEY_HEADER, PRO_API_KEY_HEADER,
    PRO_API_URL,
};

/// Base URL and credentials for the upstream API.
///
/// Both values are optional at construction time; their absence is reported
/// as [`HttpError::ConfigMissing`] when a request is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub api_key_header: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_key_header: DEMO_API_KEY_HEADER.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::default().base_url(base_url).api_key(api_key)
    }

    /// Public (demo-plan) API with a demo key.
    pub fn public(api_key: &str) -> Self {
        Self::new(DEFAULT_API_URL, api_key)
    }

    /// Pro API: pro base URL and the `x-cg-pro-api-key` header.
    pub fn pro(api_key: &str) -> Self {
        Self::new(PRO_API_URL, api_key).api_key_header(PRO_API_KEY_HEADER)
    }

    /// Read `COINGECKO_BASE_URL` and `COINGECKO_API_KEY`.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV).ok(),
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn api_key_header(mut self, header: &str) -> Self {
        self.api_key_header = header.to_string();
        self
    }

    /// Resolve `(base_url, api_key)`, treating empty strings as absent.
    pub(crate) fn credentials(&self) -> Result<(&str, &str), HttpError> {
        let base_url = non_empty(self.base_url.as_deref())
            .ok_or(HttpError::ConfigMissing { missing: "base_url" })?;
        let api_key = non_empty(self.api_key.as_deref())
            .ok_or(HttpError::ConfigMissing { missing: "api_key" })?;
        Ok((base_url.trim_end_matches('/'), api_key))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
