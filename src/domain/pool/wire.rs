//! Wire types for on-chain pool responses.
//!
//! Upstream answers in JSON:API form (`attributes`, `relationships`). Flat
//! objects are accepted too; any missing field deserializes as absent.

use serde::{Deserialize, Serialize};

/// REST response for pool searches and token pool listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolsResponse {
    #[serde(default)]
    pub data: Vec<PoolResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolResource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub attributes: Option<PoolAttributes>,
    #[serde(default)]
    pub relationships: Option<PoolRelationships>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolAttributes {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolRelationships {
    #[serde(default)]
    pub network: Option<Relationship>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<ResourceRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: String,
}
