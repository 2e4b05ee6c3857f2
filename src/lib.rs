#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod content;
pub mod data;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{day_aligned_ticks, evaluate_alerts, merge_series, value_domain};
pub use content::{fetch_post_index, filter_posts, render_markdown};
pub use engine::{AppState, DashboardEngine, StateMessage, Theme};
pub use models::{Alert, AlertLevel, DashboardData, MergedPoint, Post, PostCollection, TimePoint};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip all network fetches; run from the local content dir, the last
    /// snapshot and mock data only
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Run a single refresh cycle and exit instead of looping
    #[arg(long, default_value_t = false)]
    pub once: bool,

    /// Override the content base URL for the post index and bodies
    #[arg(long)]
    pub content_url: Option<String>,

    /// Start with this search query applied to the post list
    #[arg(long)]
    pub query: Option<String>,
}
