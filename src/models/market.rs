use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::models::alert::Alert;
use crate::models::timeseries::{MergedPoint, TimePoint};

// ============================================================================
// Provenance
// ============================================================================

/// Where a payload actually came from.
///
/// Generalizes the upstream proxy flag so callers and tests can always tell
/// live data from fallback data.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DataOrigin {
    /// Fetched from the external API this cycle
    Live,
    /// Restored from the last-known-good snapshot on disk
    Cache,
    /// Locally generated stand-in
    Mock,
}

/// A payload tagged with its origin.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Live,
        }
    }

    pub fn cached(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Cache,
        }
    }

    pub fn mock(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Mock,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin != DataOrigin::Live
    }
}

// ============================================================================
// Market payloads
// ============================================================================

/// Current spot price and its 24-hour change.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PriceQuote {
    pub usd: f64,
    pub change_24h_pct: f64,
}

/// Current Fear & Greed index reading (0-100).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SentimentReading {
    pub value: f64,
    pub classification: String,
    pub timestamp_ms: i64,
}

/// Current MVRV ratio plus its history.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MvrvReading {
    pub current: f64,
    pub series: Vec<TimePoint>,
}

/// Raw payloads of one fully live cycle; what the snapshot cache stores.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarketSnapshot {
    pub quote: PriceQuote,
    pub price_history: Vec<TimePoint>,
    pub sentiment: SentimentReading,
    pub mvrv: MvrvReading,
}

// ============================================================================
// DashboardData: one complete refresh cycle
// ============================================================================

/// THE FRONT BUFFER payload.
/// Built once by the refresh worker, then immutable; the presentation layer
/// only ever swaps the pointer to a newer one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DashboardData {
    pub quote: Sourced<PriceQuote>,
    pub price_history: Sourced<Vec<TimePoint>>,
    pub sentiment: Sourced<SentimentReading>,
    pub mvrv: Sourced<MvrvReading>,

    // Derived chart inputs
    pub merged: Vec<MergedPoint>,
    pub ticks: Vec<i64>,
    pub mvrv_domain: (f64, f64),
    pub alerts: Vec<Alert>,

    pub fetched_at_ms: i64,
}

impl DashboardData {
    /// True when any signal had to fall back to cache or mock data.
    pub fn has_fallback_data(&self) -> bool {
        self.quote.is_fallback()
            || self.price_history.is_fallback()
            || self.sentiment.is_fallback()
            || self.mvrv.is_fallback()
    }
}
