//! File persistence and serialization configuration

/// Settings for the last-known-good market snapshot cache
pub struct SnapshotSettings {
    /// Directory the snapshot file lives in
    pub directory: &'static str,
    /// Base filename (without extension)
    pub filename_without_ext: &'static str,
    /// Current version of the snapshot serialization format
    pub version: f64,
    /// Snapshots older than this are not used as fallback (seconds)
    pub acceptable_age_secs: i64,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub snapshot: SnapshotSettings,
    /// Path for the persisted theme preference (read once at startup,
    /// written on every change)
    pub theme_state_path: &'static str,
    /// Local directory holding the post index and markdown bodies
    pub content_dir: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    snapshot: SnapshotSettings {
        directory: "snapshot_data",
        filename_without_ext: "market_snapshot",
        version: 1.0,
        // 24 hours (60 * 60 * 24)
        acceptable_age_secs: 86_400,
    },
    theme_state_path: ".theme.json",
    content_dir: "content",
};

/// Generate the version-specific snapshot filename
/// Example: "market_snapshot_v1.bin"
pub fn snapshot_cache_filename() -> String {
    format!(
        "{}_v{}.bin",
        PERSISTENCE.snapshot.filename_without_ext, PERSISTENCE.snapshot.version
    )
}
