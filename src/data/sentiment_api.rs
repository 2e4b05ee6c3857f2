//! Fear & Greed composite index.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::ENDPOINTS;
use crate::data::{http_client, with_retries};
use crate::models::SentimentReading;
use crate::utils::TimeUtils;

// The API serializes every field as a string
#[derive(Debug, Deserialize)]
struct FngEnvelope {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
    value_classification: String,
    timestamp: String,
}

/// Current index value (0-100), classification label and update time.
pub async fn fetch_sentiment() -> Result<SentimentReading> {
    let client = http_client()?;

    with_retries("sentiment", || async {
        let envelope: FngEnvelope = client
            .get(ENDPOINTS.sentiment.fng_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Malformed sentiment response")?;

        let entry = envelope
            .data
            .into_iter()
            .next()
            .context("Sentiment response carried no entries")?;

        let value: f64 = entry
            .value
            .parse()
            .context("Sentiment value was not numeric")?;
        let timestamp_s: i64 = entry
            .timestamp
            .parse()
            .context("Sentiment timestamp was not numeric")?;

        Ok(SentimentReading {
            value,
            classification: entry.value_classification,
            timestamp_ms: timestamp_s * TimeUtils::MS_IN_S,
        })
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parses_stringly_typed_fields() {
        let raw = r#"{
            "name": "Fear and Greed Index",
            "data": [{"value": "73", "value_classification": "Greed",
                      "timestamp": "1718928000", "time_until_update": "3600"}]
        }"#;
        let envelope: FngEnvelope = serde_json::from_str(raw).unwrap();

        let entry = &envelope.data[0];
        assert_eq!(entry.value, "73");
        assert_eq!(entry.value_classification, "Greed");
        assert_eq!(entry.timestamp.parse::<i64>().unwrap(), 1_718_928_000);
    }
}
