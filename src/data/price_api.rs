//! Spot price and daily history from the public price API.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::config::{DASHBOARD, ENDPOINTS};
use crate::data::{http_client, with_retries};
use crate::models::{PriceQuote, TimePoint};

#[derive(Debug, Deserialize)]
struct SimplePriceEnvelope {
    bitcoin: SimplePriceEntry,
}

#[derive(Debug, Deserialize)]
struct SimplePriceEntry {
    usd: f64,
    #[serde(rename = "usd_24h_change")]
    usd_24h_change: f64,
}

/// The history endpoint answers `{ "prices": [[ts_ms, value], ...] }`.
#[derive(Debug, Deserialize)]
struct MarketChartEnvelope {
    prices: Vec<(i64, f64)>,
}

/// Current price and 24h change.
pub async fn fetch_price_quote() -> Result<PriceQuote> {
    let client = http_client()?;

    with_retries("price quote", || async {
        let envelope: SimplePriceEnvelope = client
            .get(ENDPOINTS.price.simple_price_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Malformed price quote response")?;

        Ok(PriceQuote {
            usd: envelope.bitcoin.usd,
            change_24h_pct: envelope.bitcoin.usd_24h_change,
        })
    })
    .await
}

/// Daily price history covering the configured span.
pub async fn fetch_price_history() -> Result<Vec<TimePoint>> {
    let client = http_client()?;
    let url = format!(
        "{}?vs_currency=usd&days={}&interval=daily",
        ENDPOINTS.price.market_chart_url, DASHBOARD.history_days
    );

    with_retries("price history", || async {
        let envelope: MarketChartEnvelope = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Malformed price history response")?;

        if envelope.prices.is_empty() {
            bail!("Price history response was empty");
        }

        let mut series: Vec<TimePoint> = envelope
            .prices
            .into_iter()
            .map(|(t, value)| TimePoint::new(t, value))
            .collect();
        // The merger and tick generator require ascending input
        series.sort_by_key(|point| point.t);
        Ok(series)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_chart_envelope_parses_pairs() {
        let raw = r#"{"prices": [[1704067200000, 42000.5], [1704153600000, 43100.0]]}"#;
        let envelope: MarketChartEnvelope = serde_json::from_str(raw).unwrap();

        assert_eq!(envelope.prices.len(), 2);
        assert_eq!(envelope.prices[0], (1_704_067_200_000, 42000.5));
    }

    #[test]
    fn test_simple_price_envelope_parses() {
        let raw = r#"{"bitcoin": {"usd": 67123.4, "usd_24h_change": -1.52}}"#;
        let envelope: SimplePriceEnvelope = serde_json::from_str(raw).unwrap();

        assert_eq!(envelope.bitcoin.usd, 67123.4);
        assert_eq!(envelope.bitcoin.usd_24h_change, -1.52);
    }
}
