use anyhow::{Context, Result};
use pradowrites::config::DASHBOARD;
use pradowrites::data::mock;
use pradowrites::data::snapshot_cache::SnapshotFile;
use pradowrites::models::MarketSnapshot;
use pradowrites::utils::time_utils::local_now_as_timestamp_ms;

fn main() -> Result<()> {
    build_mock_snapshot()
}

/// Write a mock snapshot cache so the app can run fully offline
/// (`pradowrites --offline`) without ever touching the network.
fn build_mock_snapshot() -> Result<()> {
    let now_ms = local_now_as_timestamp_ms();

    let price_history = mock::mock_price_history(DASHBOARD.history_days, now_ms);
    let snapshot = MarketSnapshot {
        quote: mock::mock_quote(&price_history),
        sentiment: mock::mock_sentiment(now_ms),
        mvrv: mock::mock_mvrv(&price_history),
        price_history,
    };

    let output_path = SnapshotFile::default_path();
    let file = SnapshotFile::new(snapshot);
    file.save_to_path(&output_path)
        .with_context(|| format!("Failed to write snapshot {:?}", output_path))?;

    println!(
        "✅ Mock snapshot written to {:?} with {} price points.",
        output_path,
        file.data.price_history.len()
    );
    Ok(())
}
