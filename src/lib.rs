//! # CoinScope SDK
//!
//! Data layer for the CoinScope market dashboard: a gateway to the CoinGecko
//! REST API plus the formatting helpers the pages render with.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Formatting, pagination, domain models, wire types (always available, WASM-safe)
//! 2. **HTTP API**: `CoinGeckoHttp`, one GET per call, no retries
//! 3. **High-Level Client**: `CoinScopeClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinscope::prelude::*;
//!
//! let client = CoinScopeClient::builder()
//!     .config(GatewayConfig::from_env())
//!     .build()?;
//!
//! let trending = client.coins().trending().await?;
//! let pool = client.pools().get("pepe", None, None).await;
//! println!("{}", format_currency(trending[0].price, None, None, None));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Formatting, pagination and query helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

/// Gateway configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP gateway.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinScopeClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Formatting + pagination
    pub use crate::shared::fmt::{
        format_currency, format_percentage, time_ago, time_ago_at, trending_classes, DateInput,
        Trend, TrendClasses,
    };
    pub use crate::shared::pagination::{build_page_numbers, PageItem};
    pub use crate::shared::query::{QueryParams, QueryValue};

    // Domain types
    pub use crate::domain::coin::{CoinDetails, TrendingCoin};
    pub use crate::domain::ohlc::{convert_ohlc_data, Candle, OhlcData, OhlcQuery, OhlcRange};
    pub use crate::domain::pool::{PoolData, PoolLookup};

    // Errors + config
    pub use crate::config::GatewayConfig;
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP gateway + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinScopeClient, CoinScopeClientBuilder, CoinsClient, PoolsClient};
    #[cfg(feature = "http")]
    pub use crate::http::{CoinGeckoHttp, Fetched, Revalidate};
}
