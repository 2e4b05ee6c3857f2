//! Locally generated stand-in data for failed fetches.
//!
//! Shapes are deterministic (daily grid, configured lengths, bounded value
//! bands) while individual values are random walks. Mock MVRV series are
//! anchored to the price series' time axis so the merger still lines up.

use rand::Rng;

use crate::config::DASHBOARD;
use crate::models::{MvrvReading, PriceQuote, SentimentReading, TimePoint};
use crate::utils::TimeUtils;
use crate::utils::time_utils::align_down_to_day;

/// Daily price series ending on the current day, random-walked around the
/// configured base level.
pub fn mock_price_history(days: usize, now_ms: i64) -> Vec<TimePoint> {
    let mut rng = rand::thread_rng();
    let drift = DASHBOARD.mock.max_daily_drift;

    let first_day = align_down_to_day(now_ms) - (days.saturating_sub(1) as i64) * TimeUtils::MS_IN_D;
    let mut level = DASHBOARD.mock.price_base;

    (0..days)
        .map(|i| {
            level = (level * (1.0 + rng.gen_range(-drift..drift))).max(1000.0);
            TimePoint::new(first_day + i as i64 * TimeUtils::MS_IN_D, level)
        })
        .collect()
}

/// MVRV series anchored to the given price series: same length, same
/// timestamps, values walked inside the configured band.
pub fn mock_mvrv_series(price_history: &[TimePoint]) -> Vec<TimePoint> {
    let mut rng = rand::thread_rng();
    let (floor, ceiling) = (DASHBOARD.mock.mvrv_floor, DASHBOARD.mock.mvrv_ceiling);

    let mut level: f64 = rng.gen_range(1.4..2.2);
    price_history
        .iter()
        .map(|point| {
            level = (level + rng.gen_range(-0.08..0.08)).clamp(floor, ceiling);
            TimePoint::new(point.t, level)
        })
        .collect()
}

/// Mock MVRV reading: series anchored to the price history, current value
/// taken from the walk's last step.
pub fn mock_mvrv(price_history: &[TimePoint]) -> MvrvReading {
    let series = mock_mvrv_series(price_history);
    let current = series.last().map(|point| point.value).unwrap_or(1.8);
    MvrvReading { current, series }
}

/// Mock quote coherent with the tail of the given history.
pub fn mock_quote(price_history: &[TimePoint]) -> PriceQuote {
    let mut rng = rand::thread_rng();
    let usd = price_history
        .last()
        .map(|point| point.value)
        .unwrap_or(DASHBOARD.mock.price_base);

    PriceQuote {
        usd,
        change_24h_pct: rng.gen_range(-5.0..5.0),
    }
}

/// Mock sentiment reading with a classification matching its value.
pub fn mock_sentiment(now_ms: i64) -> SentimentReading {
    let mut rng = rand::thread_rng();
    let value = rng.gen_range(0.0..100.0_f64).round();

    SentimentReading {
        value,
        classification: classify_sentiment(value).to_string(),
        timestamp_ms: now_ms,
    }
}

/// Label the 0-100 index the way the upstream API does.
pub fn classify_sentiment(value: f64) -> &'static str {
    match value {
        v if v < 25.0 => "Extreme Fear",
        v if v < 45.0 => "Fear",
        v if v < 55.0 => "Neutral",
        v if v < 75.0 => "Greed",
        _ => "Extreme Greed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time_utils::local_now_as_timestamp_ms;

    #[test]
    fn test_price_history_shape() {
        let now_ms = local_now_as_timestamp_ms();
        let series = mock_price_history(180, now_ms);

        assert_eq!(series.len(), 180);
        // Daily grid, ascending, day-aligned
        assert!(
            series
                .windows(2)
                .all(|w| w[1].t - w[0].t == TimeUtils::MS_IN_D)
        );
        assert_eq!(series[0].t % TimeUtils::MS_IN_D, 0);
        assert!(series.iter().all(|p| p.value >= 1000.0));
    }

    #[test]
    fn test_mvrv_series_anchored_to_price_axis() {
        let now_ms = local_now_as_timestamp_ms();
        let price = mock_price_history(90, now_ms);
        let mvrv = mock_mvrv_series(&price);

        assert_eq!(mvrv.len(), price.len(), "Same length as the price series");
        assert!(
            mvrv.iter()
                .zip(price.iter())
                .all(|(m, p)| m.t == p.t),
            "Same timestamps as the price series"
        );
        assert!(
            mvrv.iter()
                .all(|p| (0.8..=3.6).contains(&p.value)),
            "Values stay inside the configured band"
        );
    }

    #[test]
    fn test_sentiment_classification_bands() {
        assert_eq!(classify_sentiment(10.0), "Extreme Fear");
        assert_eq!(classify_sentiment(30.0), "Fear");
        assert_eq!(classify_sentiment(50.0), "Neutral");
        assert_eq!(classify_sentiment(60.0), "Greed");
        assert_eq!(classify_sentiment(90.0), "Extreme Greed");
    }

    #[test]
    fn test_mock_quote_matches_history_tail() {
        let now_ms = local_now_as_timestamp_ms();
        let price = mock_price_history(10, now_ms);
        let quote = mock_quote(&price);

        assert_eq!(quote.usd, price.last().unwrap().value);
        assert!((-5.0..=5.0).contains(&quote.change_24h_pct));
    }
}
