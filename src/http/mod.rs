//! HTTP layer: `CoinGeckoHttp`, the single gateway for upstream calls.

pub mod client;
pub mod revalidate;

pub use crate::shared::query::{QueryParams, QueryValue};
pub use client::CoinGeckoHttp;
pub use revalidate::{Fetched, Revalidate};
