pub mod core;
pub mod messages;
pub mod state;
pub mod worker;

// Re-export key components
pub use core::DashboardEngine;
pub use messages::{RefreshRequest, RefreshResult, StateMessage};
pub use state::{AppState, DashboardState, Theme, ThemePreference};
