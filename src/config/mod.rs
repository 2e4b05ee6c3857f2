//! Configuration module for the pradowrites application.

pub mod dashboard;
pub mod debug;
pub mod endpoints;
pub mod persistence;

// Re-export commonly used items
pub use dashboard::DASHBOARD;
pub use endpoints::ENDPOINTS;
pub use persistence::{PERSISTENCE, snapshot_cache_filename};
