//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types handed to the rendering layer
//! - `wire.rs`: Raw serde structs matching upstream responses
//! - `convert.rs`: `From` conversions from wire to domain types
//! - `client.rs`: Sub-client with HTTP methods

pub mod coin;
pub mod ohlc;
pub mod pool;
