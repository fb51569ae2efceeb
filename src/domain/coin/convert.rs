//! Conversions from coin wire types to domain types.

use super::wire::{CoinResponse, TrendingItem};
use super::{CoinDetails, TrendingCoin};

impl From<TrendingItem> for TrendingCoin {
    fn from(item: TrendingItem) -> Self {
        let data = item.data.unwrap_or_default();
        Self {
            id: item.id,
            name: item.name,
            symbol: item.symbol,
            image: item.large.or(item.thumb).unwrap_or_default(),
            price: data.price,
            change_24h: data.price_change_percentage_24h.get("usd").copied(),
        }
    }
}

impl From<CoinResponse> for CoinDetails {
    fn from(c: CoinResponse) -> Self {
        let image = c.image.unwrap_or_default();
        let market = c.market_data.unwrap_or_default();
        Self {
            id: c.id,
            name: c.name,
            symbol: c.symbol,
            image: image.large.or(image.small).or(image.thumb).unwrap_or_default(),
            current_price: market.current_price,
            change_24h: market.price_change_percentage_24h_in_currency,
            market_cap: market.market_cap,
        }
    }
}
