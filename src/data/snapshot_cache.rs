//! Last-known-good market payload, persisted between runs.
//!
//! A fresh snapshot is the preferred fallback when a live fetch fails; only
//! when no valid snapshot exists does the worker reach for mock data.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SNAPSHOT_EVENTS;
use crate::config::{PERSISTENCE, snapshot_cache_filename};
use crate::models::MarketSnapshot;
use crate::utils::time_utils::how_many_seconds_ago;

/// Serialized snapshot wrapper.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SnapshotFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub data: MarketSnapshot,
}

impl SnapshotFile {
    pub fn new(data: MarketSnapshot) -> Self {
        Self {
            version: PERSISTENCE.snapshot.version,
            timestamp_ms: Utc::now().timestamp_millis(),
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file =
            File::open(path).context(format!("Failed to open snapshot file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let snapshot = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize snapshot: {:?}", path))?;
        Ok(snapshot)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize snapshot to: {}", path.display()))
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(PERSISTENCE.snapshot.directory).join(snapshot_cache_filename())
    }
}

/// Load a snapshot only if its format version matches and it is recent
/// enough to stand in for live data.
pub fn load_valid_snapshot(path: &Path, acceptable_age_secs: i64) -> Result<SnapshotFile> {
    #[cfg(debug_assertions)]
    if PRINT_SNAPSHOT_EVENTS {
        log::info!("Checking validity of snapshot at {:?}...", path);
    }

    let snapshot = SnapshotFile::load_from_path(path)?;

    // Check version
    if snapshot.version != PERSISTENCE.snapshot.version {
        bail!(
            "Snapshot version mismatch: file v{} vs required v{}",
            snapshot.version,
            PERSISTENCE.snapshot.version
        );
    }

    // Check recency
    let seconds_ago = how_many_seconds_ago(snapshot.timestamp_ms);
    if seconds_ago > acceptable_age_secs {
        bail!(
            "Snapshot too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            acceptable_age_secs
        );
    }

    #[cfg(debug_assertions)]
    if PRINT_SNAPSHOT_EVENTS {
        log::info!(
            "✅ Snapshot valid: v{}, {}s old (limit {}s)",
            snapshot.version,
            seconds_ago,
            acceptable_age_secs
        );
    }

    Ok(snapshot)
}

/// Async wrapper for the snapshot write.
/// Spawns a blocking task so a refresh cycle never stalls on disk I/O.
pub async fn write_snapshot_async(data: MarketSnapshot) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let snapshot = SnapshotFile::new(data);
        snapshot.save_to_path(&SnapshotFile::default_path())
    })
    .await
    .context("Snapshot write task panicked")?
}
