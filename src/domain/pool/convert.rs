//! Conversion: PoolResource → PoolData.

use super::wire::PoolResource;
use super::PoolData;

impl From<PoolResource> for PoolData {
    fn from(p: PoolResource) -> Self {
        let attributes = p.attributes.unwrap_or_default();
        let network = p.network.or_else(|| {
            p.relationships
                .and_then(|r| r.network)
                .and_then(|n| n.data)
                .map(|d| d.id)
        });

        Self {
            id: p.id,
            address: p.address.or(attributes.address).unwrap_or_default(),
            name: p.name.or(attributes.name).unwrap_or_default(),
            network: network.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_api_resource() {
        let json = r#"{
            "id": "eth_0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640",
            "type": "pool",
            "attributes": {
                "address": "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640",
                "name": "USDC / WETH 0.05%",
                "reserve_in_usd": "163986123.45"
            },
            "relationships": {
                "network": {"data": {"id": "eth", "type": "network"}}
            }
        }"#;
        let resource: PoolResource = serde_json::from_str(json).unwrap();
        let pool = PoolData::from(resource);
        assert_eq!(pool.id, "eth_0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640");
        assert_eq!(pool.address, "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640");
        assert_eq!(pool.name, "USDC / WETH 0.05%");
        assert_eq!(pool.network, "eth");
    }

    #[test]
    fn test_flat_resource() {
        let json = r#"{"id": "p1", "address": "0x1", "name": "X / Y", "network": "base"}"#;
        let pool = PoolData::from(serde_json::from_str::<PoolResource>(json).unwrap());
        assert_eq!(
            pool,
            PoolData {
                id: "p1".to_string(),
                address: "0x1".to_string(),
                name: "X / Y".to_string(),
                network: "base".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let pool = PoolData::from(serde_json::from_str::<PoolResource>(r#"{"id": "p2"}"#).unwrap());
        assert_eq!(pool.id, "p2");
        assert_eq!(pool.address, "");
        assert_eq!(pool.name, "");
        assert_eq!(pool.network, "");
    }
}
