//! High-level client: `CoinScopeClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::GatewayConfig;
use crate::domain::coin::client::Coins;
use crate::domain::pool::client::Pools;
use crate::error::SdkError;
use crate::http::CoinGeckoHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::pool::client::Pools as PoolsClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.pools()`.
#[derive(Clone)]
pub struct CoinScopeClient {
    pub(crate) http: CoinGeckoHttp,
}

impl CoinScopeClient {
    pub fn builder() -> CoinScopeClientBuilder {
        CoinScopeClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn pools(&self) -> Pools<'_> {
        Pools { client: self }
    }

    /// The underlying gateway, for endpoints without a sub-client.
    pub fn http(&self) -> &CoinGeckoHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct CoinScopeClientBuilder {
    config: GatewayConfig,
}

impl CoinScopeClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.config = self.config.api_key(key);
        self
    }

    pub fn api_key_header(mut self, header: &str) -> Self {
        self.config = self.config.api_key_header(header);
        self
    }

    /// Build the client. Missing base URL or API key is not an error here;
    /// it surfaces on the first request.
    pub fn build(self) -> Result<CoinScopeClient, SdkError> {
        Ok(CoinScopeClient {
            http: CoinGeckoHttp::new(self.config)?,
        })
    }
}
