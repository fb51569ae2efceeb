//! Low-level HTTP gateway: `CoinGeckoHttp`.
//!
//! `fetch` is the only path to the network. The endpoint methods below it
//! return wire types; conversion to domain types happens in the sub-clients.

use crate::config::GatewayConfig;
use crate::domain::coin::wire::{CoinResponse, TrendingResponse};
use crate::domain::ohlc::OhlcData;
use crate::domain::pool::wire::PoolsResponse;
use crate::error::HttpError;
use crate::http::revalidate::{Fetched, Revalidate};
use crate::shared::query::QueryParams;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Gateway to the CoinGecko REST API.
///
/// Every call performs exactly one GET. There are no retries and no timeout.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    config: GatewayConfig,
    client: Client,
}

impl CoinGeckoHttp {
    pub fn new(config: GatewayConfig) -> Result<Self, HttpError> {
        Ok(Self::with_client(config, Client::builder().build()?))
    }

    /// Use a pre-built `reqwest::Client`.
    pub fn with_client(config: GatewayConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the full request URL for `endpoint` and `params`.
    ///
    /// Fails with `ConfigMissing` when the base URL is absent.
    pub fn url_for(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<String, HttpError> {
        let (base_url, _) = self.config.credentials()?;
        build_url(base_url, endpoint, params)
    }

    // ── Gateway ──────────────────────────────────────────────────────────

    /// GET `endpoint` with the default 60s revalidation hint.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
    ) -> Result<T, HttpError> {
        self.fetch(endpoint, params, Revalidate::DEFAULT).await
    }

    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
        revalidate: Revalidate,
    ) -> Result<T, HttpError> {
        Ok(self
            .fetch_with_meta(endpoint, params, revalidate)
            .await?
            .into_inner())
    }

    /// Like [`fetch`](Self::fetch), but hands the revalidation hint back with
    /// the body so an outer cache can honour it.
    pub async fn fetch_with_meta<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Option<&QueryParams>,
        revalidate: Revalidate,
    ) -> Result<Fetched<T>, HttpError> {
        let (base_url, api_key) = match self.config.credentials() {
            Ok(creds) => creds,
            Err(e) => {
                tracing::warn!("CoinGecko env vars missing: {}", e);
                return Err(e);
            }
        };
        let url = build_url(base_url, endpoint, params)?;

        tracing::debug!(
            endpoint,
            revalidate_secs = revalidate.as_secs(),
            "GET {}",
            url
        );

        let resp = self
            .client
            .get(&url)
            .header(self.config.api_key_header.as_str(), api_key)
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "upstream error for {}", endpoint);
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data = resp.json::<T>().await?;
        Ok(Fetched { data, revalidate })
    }

    // ── Pools ────────────────────────────────────────────────────────────

    pub async fn search_pools(&self, query: &str) -> Result<PoolsResponse, HttpError> {
        let params = QueryParams::new().with("query", query);
        self.get("/onchain/search/pools", Some(&params)).await
    }

    pub async fn get_token_pools(
        &self,
        network: &str,
        contract_address: &str,
    ) -> Result<PoolsResponse, HttpError> {
        let endpoint = format!(
            "/onchain/networks/{}/tokens/{}/pools",
            urlencoding::encode(network),
            urlencoding::encode(contract_address)
        );
        self.get(&endpoint, None).await
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_trending(&self) -> Result<TrendingResponse, HttpError> {
        self.fetch("/search/trending", None, Revalidate::secs(300))
            .await
    }

    pub async fn get_coin(&self, id: &str) -> Result<CoinResponse, HttpError> {
        let endpoint = format!("/coins/{}", urlencoding::encode(id));
        let params = QueryParams::new().with("dex_pair_format", "symbol");
        self.get(&endpoint, Some(&params)).await
    }

    pub async fn get_coin_ohlc(
        &self,
        id: &str,
        params: &QueryParams,
    ) -> Result<Vec<OhlcData>, HttpError> {
        let endpoint = format!("/coins/{}/ohlc", urlencoding::encode(id));
        self.get(&endpoint, Some(params)).await
    }

    pub async fn get_simple_price(
        &self,
        ids: &[&str],
        vs_currencies: &[&str],
    ) -> Result<HashMap<String, HashMap<String, f64>>, HttpError> {
        let params = QueryParams::new()
            .with("ids", ids.join(","))
            .with("vs_currencies", vs_currencies.join(","));
        self.get("/simple/price", Some(&params)).await
    }
}

fn build_url(
    base_url: &str,
    endpoint: &str,
    params: Option<&QueryParams>,
) -> Result<String, HttpError> {
    let mut url = format!("{}{}", base_url, endpoint);
    if let Some(p) = params.filter(|p| !p.is_empty()) {
        let query = p
            .to_query_string()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        if !query.is_empty() {
            url = format!("{}?{}", url, query);
        }
    }
    Ok(url)
}
