//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Gateway errors.
///
/// None of these are retried by the gateway.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Base URL or API key absent. Raised before any network attempt.
    #[error("CoinGecko configuration missing: {missing}")]
    ConfigMissing { missing: &'static str },

    /// Upstream answered with a non-2xx status.
    #[error("CoinGecko error {status}")]
    Status { status: u16, body: String },

    /// Transport or body-decoding failure, propagated unchanged.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Status code of an upstream HTTP error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_config_missing(&self) -> bool {
        matches!(self, HttpError::ConfigMissing { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}
