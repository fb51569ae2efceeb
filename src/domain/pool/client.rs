//! Pools sub-client: pool lookup for a coin or token contract.

use crate::client::CoinScopeClient;
use crate::domain::pool::{PoolData, PoolLookup};

pub struct Pools<'a> {
    pub(crate) client: &'a CoinScopeClient,
}

impl<'a> Pools<'a> {
    /// Look up the primary pool for a coin.
    ///
    /// With both `network` and `contract_address` set, the token's own pool
    /// list is queried; otherwise `id` is used as a pool search term. Gateway
    /// errors never escape: they come back as `PoolLookup::Unavailable`.
    pub async fn lookup(
        &self,
        id: &str,
        network: Option<&str>,
        contract_address: Option<&str>,
    ) -> PoolLookup {
        let network = network.filter(|n| !n.is_empty());
        let contract_address = contract_address.filter(|c| !c.is_empty());

        let result = match (network, contract_address) {
            (Some(network), Some(contract)) => {
                self.client.http.get_token_pools(network, contract).await
            }
            _ => self.client.http.search_pools(id).await,
        };

        match result {
            Ok(resp) => PoolLookup::from_response(resp),
            Err(e) => {
                tracing::debug!(id, "pool lookup fell back: {}", e);
                PoolLookup::Unavailable(e)
            }
        }
    }

    /// Like [`lookup`](Self::lookup), collapsed to the pool or the fallback.
    pub async fn get(
        &self,
        id: &str,
        network: Option<&str>,
        contract_address: Option<&str>,
    ) -> PoolData {
        self.lookup(id, network, contract_address)
            .await
            .into_pool()
    }
}
