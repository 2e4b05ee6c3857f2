//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! normal runs remain quiet.

/// Emit provider chain wins/losses while resolving the post index.
pub const PRINT_CONTENT_SOURCES: bool = true;

/// Emit per-signal fetch outcomes (origin, timing) for each refresh cycle.
pub const PRINT_FETCH_EVENTS: bool = false;

/// Emit state messages as they are applied.
pub const PRINT_STATE_MESSAGES: bool = false;

/// Emit detailed snapshot cache read/write logs.
pub const PRINT_SNAPSHOT_EVENTS: bool = false;
