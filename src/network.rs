//! Network constants for the CoinGecko API.

/// Public (demo-tier) REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Pro-tier REST API base URL.
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Header carrying a demo-tier API key.
pub const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Header carrying a pro-tier API key.
pub const PRO_API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "COINGECKO_BASE_URL";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "COINGECKO_API_KEY";
