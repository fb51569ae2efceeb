//! Wire types for coin responses (trending, details).

use crate::shared::serde_util::number_or_string;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// REST response for `/search/trending`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub coins: Vec<TrendingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub item: TrendingItem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub data: Option<TrendingItemData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingItemData {
    #[serde(default, deserialize_with = "number_or_string::deserialize")]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: HashMap<String, f64>,
}

/// REST response for `/coins/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinResponse {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<CoinImage>,
    #[serde(default)]
    pub market_data: Option<MarketData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinImage {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
}
