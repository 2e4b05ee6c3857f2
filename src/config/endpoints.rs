//! External API endpoints and HTTP client policy.

/// Default values for the HTTP client
pub struct ClientDefaults {
    /// Per-attempt request timeout
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
    /// Overall deadline for one signal within a refresh cycle (covers
    /// retries). Exceeding it abandons that signal and falls back without
    /// blocking the other concurrent fetches.
    pub fetch_deadline_ms: u64,
}

/// Endpoints serving the Bitcoin spot price and its daily history
pub struct PriceEndpoints {
    /// Current price + 24h change, complete URL
    pub simple_price_url: &'static str,
    /// Daily history base URL; takes `vs_currency`, `days` and `interval`
    /// query parameters
    pub market_chart_url: &'static str,
}

/// Endpoint serving the Fear & Greed composite index
pub struct SentimentEndpoints {
    pub fng_url: &'static str,
}

/// Internal endpoint serving the MVRV valuation ratio
pub struct MvrvEndpoints {
    pub url: &'static str,
}

/// Where the blog content (post index + markdown bodies) is hosted
pub struct ContentEndpoints {
    pub base_url: &'static str,
}

/// The Master Endpoints Configuration
pub struct EndpointsConfig {
    pub price: PriceEndpoints,
    pub sentiment: SentimentEndpoints,
    pub mvrv: MvrvEndpoints,
    pub content: ContentEndpoints,
    pub client: ClientDefaults,
}

pub const ENDPOINTS: EndpointsConfig = EndpointsConfig {
    price: PriceEndpoints {
        simple_price_url: "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd&include_24hr_change=true",
        market_chart_url: "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart",
    },
    sentiment: SentimentEndpoints {
        fng_url: "https://api.alternative.me/fng/",
    },
    mvrv: MvrvEndpoints {
        // Served by a local proxy; there is no stable public MVRV API
        url: "http://127.0.0.1:8787/api/mvrv",
    },
    content: ContentEndpoints {
        base_url: "https://pradowrites.com",
    },
    client: ClientDefaults {
        timeout_ms: 5000,
        retries: 2,
        backoff_ms: 1000,
        fetch_deadline_ms: 12_000,
    },
};
