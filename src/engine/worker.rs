//! The refresh worker: fetch every signal concurrently, degrade each one
//! independently, derive the chart inputs, post back one immutable payload.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::analysis::{day_aligned_ticks, evaluate_alerts, merge_series, value_domain};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_FETCH_EVENTS;
use crate::config::{DASHBOARD, ENDPOINTS, PERSISTENCE};
use crate::data::snapshot_cache::{SnapshotFile, load_valid_snapshot, write_snapshot_async};
use crate::data::{fetch_mvrv, fetch_price_history, fetch_price_quote, fetch_sentiment, mock};
use crate::models::{
    DashboardData, MarketSnapshot, MvrvReading, PriceQuote, SentimentReading, Sourced, TimePoint,
};
use crate::utils::time_utils::local_now_as_timestamp_ms;

use super::messages::{RefreshRequest, RefreshResult};

pub fn spawn_refresh_worker(
    mut rx: UnboundedReceiver<RefreshRequest>,
    tx: UnboundedSender<RefreshResult>,
) {
    tokio::spawn(async move {
        while let Some(req) = rx.recv().await {
            let start = Instant::now();

            let result = run_refresh_cycle(&req).await;
            let elapsed = start.elapsed().as_millis();

            let send = tx.send(RefreshResult {
                cycle: req.cycle,
                duration_ms: elapsed,
                result: result.map(Arc::new).map_err(|e| format!("{e:#}")),
            });
            // Receiver gone means the engine is shutting down
            if send.is_err() {
                break;
            }
        }
    });
}

/// Cap one signal's total fetch time (including retries). Exceeding the
/// deadline abandons that signal without blocking the others.
async fn fetch_with_deadline<T>(
    label: &'static str,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    let deadline = Duration::from_millis(ENDPOINTS.client.fetch_deadline_ms);
    match tokio::time::timeout(deadline, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            log::warn!("{} fetch failed: {:#}", label, e);
            Err(e)
        }
        Err(_) => {
            log::warn!("{} fetch exceeded {:?} deadline", label, deadline);
            Err(anyhow!("{label} timed out"))
        }
    }
}

async fn run_refresh_cycle(req: &RefreshRequest) -> Result<DashboardData> {
    let now_ms = local_now_as_timestamp_ms();

    // Last-known-good payload, if fresh enough. Preferred over mock data.
    let snapshot: Option<MarketSnapshot> = load_valid_snapshot(
        &SnapshotFile::default_path(),
        PERSISTENCE.snapshot.acceptable_age_secs,
    )
    .map(|file| file.data)
    .map_err(|e| log::info!("No usable snapshot: {:#}", e))
    .ok();

    // 1. Acquire. All signals fetch concurrently, each under its own deadline.
    let (quote_res, history_res, sentiment_res, mvrv_res) = if req.offline {
        (None, None, None, None)
    } else {
        let (q, h, s, m) = futures::join!(
            fetch_with_deadline("price quote", fetch_price_quote()),
            fetch_with_deadline("price history", fetch_price_history()),
            fetch_with_deadline("sentiment", fetch_sentiment()),
            fetch_with_deadline("mvrv", fetch_mvrv()),
        );
        (q.ok(), h.ok(), s.ok(), m.ok())
    };

    // 2. Degrade per signal: live -> snapshot -> mock.
    // History resolves first because the MVRV mock anchors to its axis.
    let price_history: Sourced<Vec<TimePoint>> = match history_res {
        Some(series) => Sourced::live(series),
        None => match &snapshot {
            Some(snap) => Sourced::cached(snap.price_history.clone()),
            None => Sourced::mock(mock::mock_price_history(DASHBOARD.history_days, now_ms)),
        },
    };

    let quote: Sourced<PriceQuote> = match quote_res {
        Some(quote) => Sourced::live(quote),
        None => match &snapshot {
            Some(snap) => Sourced::cached(snap.quote),
            None => Sourced::mock(mock::mock_quote(&price_history.value)),
        },
    };

    let sentiment: Sourced<SentimentReading> = match sentiment_res {
        Some(reading) => Sourced::live(reading),
        None => match &snapshot {
            Some(snap) => Sourced::cached(snap.sentiment.clone()),
            None => Sourced::mock(mock::mock_sentiment(now_ms)),
        },
    };

    let mvrv: Sourced<MvrvReading> = match mvrv_res {
        Some(reading) => Sourced::live(reading),
        None => match &snapshot {
            Some(snap) => Sourced::cached(snap.mvrv.clone()),
            None => Sourced::mock(mock::mock_mvrv(&price_history.value)),
        },
    };

    #[cfg(debug_assertions)]
    if PRINT_FETCH_EVENTS {
        log::info!(
            "Cycle {}: quote={} history={} sentiment={} mvrv={}",
            req.cycle,
            quote.origin,
            price_history.origin,
            sentiment.origin,
            mvrv.origin
        );
    }

    // 3. Persist a new snapshot only when the whole cycle was live.
    let fully_live = !quote.is_fallback()
        && !price_history.is_fallback()
        && !sentiment.is_fallback()
        && !mvrv.is_fallback();
    if fully_live {
        let snap = MarketSnapshot {
            quote: quote.value,
            price_history: price_history.value.clone(),
            sentiment: sentiment.value.clone(),
            mvrv: mvrv.value.clone(),
        };
        if let Err(e) = write_snapshot_async(snap).await {
            log::error!("⚠️  Failed to write snapshot: {:#}", e);
        }
    }

    // 4. Derive the chart inputs and alerts.
    let merged = merge_series(&price_history.value, &mvrv.value.series);
    let ticks = day_aligned_ticks(&price_history.value);
    let mvrv_domain = value_domain(&mvrv.value.series);
    let alerts = evaluate_alerts(Some(mvrv.value.current), Some(sentiment.value.value));

    Ok(DashboardData {
        quote,
        price_history,
        sentiment,
        mvrv,
        merged,
        ticks,
        mvrv_domain,
        alerts,
        fetched_at_ms: now_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn test_offline_cycle_completes_with_fallback_data() {
        let req = RefreshRequest {
            cycle: 0,
            offline: true,
        };

        let data = run_refresh_cycle(&req).await.expect("cycle is total");

        assert!(data.has_fallback_data(), "Offline data is never live");
        assert!(!data.price_history.value.is_empty());
        assert!(!data.merged.is_empty());
        assert!(!data.ticks.is_empty());
        let (lower, upper) = data.mvrv_domain;
        assert!(lower <= upper);
    }

    #[tokio::test]
    async fn test_worker_round_trip_over_channels() {
        let (job_tx, job_rx) = unbounded_channel();
        let (result_tx, mut result_rx) = unbounded_channel();
        spawn_refresh_worker(job_rx, result_tx);

        job_tx
            .send(RefreshRequest {
                cycle: 7,
                offline: true,
            })
            .unwrap();

        let result = result_rx.recv().await.expect("worker must answer");
        assert_eq!(result.cycle, 7);
        assert!(result.result.is_ok());
    }

    #[tokio::test]
    async fn test_deadline_passes_outcomes_through() {
        let ok = fetch_with_deadline("instant ok", async { Ok(42) }).await;
        assert_eq!(ok.unwrap(), 42);

        let err =
            fetch_with_deadline("instant err", async { Err::<i32, _>(anyhow!("boom")) }).await;
        assert!(err.is_err());
    }
}
