//! Print the home-page data the dashboard renders: a coin overview, the
//! trending list and the primary pool.
//!
//! Reads `COINGECKO_BASE_URL` / `COINGECKO_API_KEY` (a `.env` file works).
//! Without a base URL the public API is used.
//!
//! ```bash
//! RUST_LOG=coinscope=debug cargo run --example dashboard --features native -- bitcoin
//! ```

use coinscope::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let coin_id = std::env::args().nth(1).unwrap_or_else(|| "bitcoin".to_string());

    let mut config = GatewayConfig::from_env();
    if config.base_url.is_none() {
        config.base_url = Some(DEFAULT_API_URL.to_string());
    }
    let client = CoinScopeClient::builder().config(config).build()?;

    let details = client.coins().details(&coin_id).await?;
    println!(
        "{} ({}) {}  {}",
        details.name,
        details.symbol.to_uppercase(),
        format_currency(details.price_in("usd"), None, None, None),
        format_percentage(details.change_24h_in("usd")),
    );

    let candles = client
        .coins()
        .ohlc(&coin_id, &OhlcQuery::default())
        .await?;
    if let (Some(first), Some(last)) = (candles.first(), candles.last()) {
        println!(
            "{} candles, {} → {}",
            candles.len(),
            format_currency(Some(first.open), None, None, None),
            format_currency(Some(last.close), None, None, None),
        );
    }

    println!("\nTrending");
    for coin in client.coins().trending().await?.iter().take(7) {
        let change = coin.change_24h.unwrap_or_default();
        println!(
            "  {:<16} {:>14}  {:>7} {}",
            coin.name,
            format_currency(coin.price, Some(4), None, None),
            format_percentage(coin.change_24h),
            trending_classes(change).icon_class,
        );
    }

    let pool = client.pools().lookup(&coin_id, None, None).await;
    match &pool {
        PoolLookup::Found(p) => println!("\nPool: {} on {} ({})", p.name, p.network, p.address),
        PoolLookup::NoMatch => println!("\nPool: none found"),
        PoolLookup::Unavailable(e) => println!("\nPool: unavailable ({})", e),
    }

    Ok(())
}
