//! Coin domain: trending coins and coin overviews.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A trending coin. Read-only, as served upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Image URL; empty when upstream sent none.
    pub image: String,
    pub price: Option<f64>,
    /// 24h change in percent, quoted against USD.
    pub change_24h: Option<f64>,
}

/// Overview of a single coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetails {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: HashMap<String, f64>,
    pub change_24h: HashMap<String, f64>,
    pub market_cap: HashMap<String, f64>,
}

impl CoinDetails {
    /// Current price in `currency` (case-insensitive, e.g. `"usd"`).
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.current_price.get(&currency.to_lowercase()).copied()
    }

    pub fn change_24h_in(&self, currency: &str) -> Option<f64> {
        self.change_24h.get(&currency.to_lowercase()).copied()
    }

    pub fn market_cap_in(&self, currency: &str) -> Option<f64> {
        self.market_cap.get(&currency.to_lowercase()).copied()
    }
}
