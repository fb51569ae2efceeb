//! Pool domain: liquidity pools for a token, with an explicit fallback.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::HttpError;
use serde::{Deserialize, Serialize};

/// A liquidity pool for a token.
///
/// `PoolData::default()` (all fields empty) is the fallback shown whenever no
/// real pool is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolData {
    pub id: String,
    pub address: String,
    pub name: String,
    pub network: String,
}

impl PoolData {
    pub fn is_fallback(&self) -> bool {
        self == &PoolData::default()
    }
}

/// Outcome of a pool lookup.
///
/// Both `NoMatch` and `Unavailable` render as the fallback value; the split
/// lets callers tell an empty result from an upstream failure.
#[derive(Debug)]
pub enum PoolLookup {
    Found(PoolData),
    NoMatch,
    Unavailable(HttpError),
}

impl PoolLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, PoolLookup::Found(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, PoolLookup::Unavailable(_))
    }

    /// The found pool, or the fallback.
    pub fn into_pool(self) -> PoolData {
        match self {
            PoolLookup::Found(pool) => pool,
            PoolLookup::NoMatch | PoolLookup::Unavailable(_) => PoolData::default(),
        }
    }

    /// First pool of a response, or `NoMatch`.
    pub fn from_response(resp: wire::PoolsResponse) -> Self {
        resp.data
            .into_iter()
            .next()
            .map(|p| PoolLookup::Found(p.into()))
            .unwrap_or(PoolLookup::NoMatch)
    }
}
