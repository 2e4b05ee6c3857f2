// Data models for the blog and the dashboard
// These modules contain pure types independent of fetch/orchestration concerns

pub mod alert;
pub mod market;
pub mod post;
pub mod timeseries;

// Re-export key types for convenience
pub use alert::{Alert, AlertLevel};
pub use market::{
    DashboardData, DataOrigin, MarketSnapshot, MvrvReading, PriceQuote, SentimentReading, Sourced,
};
pub use post::{Post, PostCollection};
pub use timeseries::{MergedPoint, TimePoint};
