use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Severity of a derived alert.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display,
)]
pub enum AlertLevel {
    Medium,
    High,
}

/// A qualitative alert derived from the current metric snapshot.
/// Non-persistent: recomputed from scratch on every refresh cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub description: String,
}
