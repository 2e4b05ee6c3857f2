// Market data acquisition: HTTP clients, mock fallbacks, snapshot cache

pub mod mock;
pub mod mvrv_api;
pub mod price_api;
pub mod sentiment_api;
pub mod snapshot_cache;

// Re-export commonly used items
pub use mvrv_api::fetch_mvrv;
pub use price_api::{fetch_price_history, fetch_price_quote};
pub use sentiment_api::fetch_sentiment;
pub use snapshot_cache::SnapshotFile;

use std::future::Future;
use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::Client;

use crate::config::ENDPOINTS;

/// HTTP client with the configured per-attempt timeout.
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_millis(ENDPOINTS.client.timeout_ms))
        .build()?;
    Ok(client)
}

/// Run one fetch attempt per the retry/backoff policy until it succeeds.
pub async fn with_retries<T, F, Fut>(label: &str, attempt_fn: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_err = None;

    for attempt in 0..=ENDPOINTS.client.retries {
        match attempt_fn().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::info!("{} attempt {} failed: {:#}", label, attempt + 1, e);
                last_err = Some(e);
                if attempt < ENDPOINTS.client.retries {
                    tokio::time::sleep(Duration::from_millis(ENDPOINTS.client.backoff_ms)).await;
                }
            }
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow!("{label}: no attempts were made")))
}
