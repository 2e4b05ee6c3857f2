//! Min/max domain for the secondary (MVRV) chart axis.

use crate::config::DASHBOARD;
use crate::models::TimePoint;
use crate::utils::maths_utils::get_min_max;

/// Padded value range for an auxiliary axis.
///
/// Non-finite samples are skipped; a series with no finite values yields the
/// configured default domain. The raw range is padded by a fraction of its
/// span (with an absolute floor), then the bounds are rounded outward to one
/// decimal place and the lower bound is clamped at zero.
pub fn value_domain(series: &[TimePoint]) -> (f64, f64) {
    let finite: Vec<f64> = series
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .collect();

    if finite.is_empty() {
        return DASHBOARD.chart.default_mvrv_domain;
    }

    let (min, max) = get_min_max(&finite);
    let pad = ((max - min) * DASHBOARD.chart.domain_pad_fraction).max(DASHBOARD.chart.domain_pad_min);

    let lower = (((min - pad) * 10.0).floor() / 10.0).max(0.0);
    let upper = ((max + pad) * 10.0).ceil() / 10.0;
    (lower, upper)
}
