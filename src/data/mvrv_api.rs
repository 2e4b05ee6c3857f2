//! MVRV valuation ratio from the internal endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::ENDPOINTS;
use crate::data::{http_client, with_retries};
use crate::models::{MvrvReading, TimePoint};

#[derive(Debug, Deserialize)]
struct MvrvEnvelope {
    current: f64,
    series: Vec<MvrvPoint>,
}

#[derive(Debug, Deserialize)]
struct MvrvPoint {
    t: i64,
    mvrv: f64,
}

/// Current MVRV value plus its history.
pub async fn fetch_mvrv() -> Result<MvrvReading> {
    let client = http_client()?;

    with_retries("mvrv", || async {
        let envelope: MvrvEnvelope = client
            .get(ENDPOINTS.mvrv.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Malformed MVRV response")?;

        let mut series: Vec<TimePoint> = envelope
            .series
            .into_iter()
            .map(|point| TimePoint::new(point.t, point.mvrv))
            .collect();
        series.sort_by_key(|point| point.t);

        Ok(MvrvReading {
            current: envelope.current,
            series,
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parses() {
        let raw = r#"{"current": 2.31,
                      "series": [{"t": 1704067200000, "mvrv": 2.1},
                                 {"t": 1704153600000, "mvrv": 2.2}]}"#;
        let envelope: MvrvEnvelope = serde_json::from_str(raw).unwrap();

        assert_eq!(envelope.current, 2.31);
        assert_eq!(envelope.series.len(), 2);
        assert_eq!(envelope.series[1].mvrv, 2.2);
    }
}
