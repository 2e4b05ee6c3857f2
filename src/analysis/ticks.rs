//! Gridline positions for the chart's time axis.

use itertools::iterate;

use crate::config::DASHBOARD;
use crate::models::TimePoint;
use crate::utils::time_utils::align_down_to_day;

/// Evenly spaced tick timestamps spanning the series' time range.
///
/// The first tick is the series start aligned down to a whole UTC day; ticks
/// then advance at the configured stride up to one millisecond past the final
/// sample (so a tick landing exactly on the last sample is kept).
pub fn day_aligned_ticks(series: &[TimePoint]) -> Vec<i64> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };

    let aligned_start = align_down_to_day(first.t);
    iterate(aligned_start, |t| t + DASHBOARD.chart.tick_stride_ms)
        .take_while(|t| *t <= last.t + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn daily_series(start_ms: i64, days: usize) -> Vec<TimePoint> {
        (0..days)
            .map(|i| TimePoint::new(start_ms + i as i64 * TimeUtils::MS_IN_D, 100.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_empty_series_yields_no_ticks() {
        assert!(day_aligned_ticks(&[]).is_empty());
    }

    #[test]
    fn test_180_day_series_tick_count() {
        // Day-aligned start (2024-01-01 00:00 UTC)
        let start = 1_704_067_200_000_i64;
        let series = daily_series(start, 180);

        let ticks = day_aligned_ticks(&series);

        // 180 days at a 10-day stride: 18 ticks, give or take boundary rounding
        assert!(
            (17..=19).contains(&ticks.len()),
            "Expected ~18 ticks, got {}",
            ticks.len()
        );
        assert!(ticks[0] <= series[0].t, "First tick precedes the range");
        assert!(
            *ticks.last().unwrap() >= series.last().unwrap().t - 10 * TimeUtils::MS_IN_D,
            "Last tick falls within a stride of the range end"
        );
    }

    #[test]
    fn test_start_aligned_down_to_day_boundary() {
        // Series starts mid-day; first tick must be the preceding midnight
        let midday = 1_704_067_200_000_i64 + TimeUtils::MS_IN_H * 15;
        let series = daily_series(midday, 30);

        let ticks = day_aligned_ticks(&series);

        assert_eq!(ticks[0] % TimeUtils::MS_IN_D, 0);
        assert_eq!(ticks[0], 1_704_067_200_000);
        // Consecutive ticks are exactly one stride apart
        assert!(
            ticks
                .windows(2)
                .all(|w| w[1] - w[0] == 10 * TimeUtils::MS_IN_D)
        );
    }

    #[test]
    fn test_single_point_series() {
        let series = daily_series(1_704_067_200_000, 1);
        let ticks = day_aligned_ticks(&series);
        assert_eq!(ticks.len(), 1, "One in-range tick for a one-point series");
    }
}
