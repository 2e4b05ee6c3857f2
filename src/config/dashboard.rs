//! Dashboard refresh and chart-preparation configuration.

use crate::utils::TimeUtils;

/// Settings for turning raw series into chart input
pub struct ChartSettings {
    // Samples from the two series closer than this merge into one joined point
    pub merge_tolerance_ms: i64,
    // Gridline spacing on the time axis
    pub tick_stride_ms: i64,
    // Secondary-axis padding: fraction of the value range, with an absolute floor
    pub domain_pad_fraction: f64,
    pub domain_pad_min: f64,
    // Domain used when a series carries no finite values at all
    pub default_mvrv_domain: (f64, f64),
}

/// Alert thresholds (rule evaluation is stateless, no hysteresis)
pub struct AlertThresholds {
    pub mvrv_overbought: f64,
    pub mvrv_elevated: f64,
    pub greed_extreme: f64,
}

/// Shape parameters for locally generated mock data
pub struct MockSettings {
    // Anchor level for the mock price walk
    pub price_base: f64,
    // Largest single-day fractional move in the mock walk
    pub max_daily_drift: f64,
    // Mock MVRV values stay inside this band
    pub mvrv_floor: f64,
    pub mvrv_ceiling: f64,
}

/// The Master Dashboard Configuration
pub struct DashboardConfig {
    // Seconds between completed refresh cycles
    pub refresh_interval_secs: u64,
    // Daily history span requested from the price API (~6 months)
    pub history_days: usize,

    // Sub-groups
    pub chart: ChartSettings,
    pub alerts: AlertThresholds,
    pub mock: MockSettings,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    refresh_interval_secs: 60,
    history_days: 180,

    chart: ChartSettings {
        merge_tolerance_ms: TimeUtils::MS_IN_12_H,
        tick_stride_ms: 10 * TimeUtils::MS_IN_D,
        domain_pad_fraction: 0.1,
        domain_pad_min: 0.05,
        default_mvrv_domain: (0.0, 4.0),
    },

    alerts: AlertThresholds {
        mvrv_overbought: 3.0,
        mvrv_elevated: 2.5,
        greed_extreme: 70.0,
    },

    mock: MockSettings {
        price_base: 65_000.0,
        max_daily_drift: 0.03,
        mvrv_floor: 0.8,
        mvrv_ceiling: 3.6,
    },
};
