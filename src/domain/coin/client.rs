//! Coins sub-client: trending list, overviews, candles, spot prices.

use crate::client::CoinScopeClient;
use crate::domain::coin::{CoinDetails, TrendingCoin};
use crate::domain::ohlc::{convert_ohlc_data, Candle, OhlcQuery};
use crate::error::SdkError;
use std::collections::HashMap;

pub struct Coins<'a> {
    pub(crate) client: &'a CoinScopeClient,
}

impl<'a> Coins<'a> {
    pub async fn trending(&self) -> Result<Vec<TrendingCoin>, SdkError> {
        let resp = self.client.http.get_trending().await?;
        Ok(resp
            .coins
            .into_iter()
            .map(|entry| TrendingCoin::from(entry.item))
            .collect())
    }

    pub async fn details(&self, id: &str) -> Result<CoinDetails, SdkError> {
        Ok(self.client.http.get_coin(id).await?.into())
    }

    /// Candles for `id`, with repeated timestamps removed.
    pub async fn ohlc(&self, id: &str, query: &OhlcQuery) -> Result<Vec<Candle>, SdkError> {
        let data = self
            .client
            .http
            .get_coin_ohlc(id, &query.to_params())
            .await?;
        Ok(convert_ohlc_data(&data))
    }

    /// Spot prices: `coin id → currency → price`.
    pub async fn simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
    ) -> Result<HashMap<String, HashMap<String, f64>>, SdkError> {
        Ok(self
            .client
            .http
            .get_simple_price(ids, vs_currencies)
            .await?)
    }
}
