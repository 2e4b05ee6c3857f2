use std::sync::Arc;

use crate::models::{DashboardData, Post};

/// A request to run one dashboard refresh cycle
#[derive(Debug, Clone)]
pub struct RefreshRequest {
    pub cycle: u64,
    /// Skip network fetches entirely; resolve from snapshot/mock only
    pub offline: bool,
}

/// The result returned by the refresh worker
#[derive(Debug)]
pub struct RefreshResult {
    pub cycle: u64,
    pub duration_ms: u128,

    // Success: The new Front Buffer
    // Failure: The error string
    pub result: Result<Arc<DashboardData>, String>,
}

/// State mutations accepted by `AppState::apply`.
/// All UI-facing state changes funnel through these; nothing mutates the
/// state ambiently.
#[derive(Debug, Clone)]
pub enum StateMessage {
    SetQuery(String),
    OpenPost(String),
    ClosePost,
    /// A lazily fetched body arrived; cache it by slug
    BodyLoaded {
        slug: String,
        body: String,
    },
    /// A post index load succeeded; replace the active set wholesale
    IndexReplaced {
        posts: Vec<Post>,
        source: &'static str,
    },
    ToggleTheme,
}
