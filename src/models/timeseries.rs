use serde::{Deserialize, Serialize};

// ============================================================================
// TimePoint: one observation in a day-granularity metric series
// ============================================================================

/// Series handed to the chart pipeline are ordered ascending by `t` with no
/// duplicate timestamps.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    /// Epoch milliseconds
    pub t: i64,
    pub value: f64,
}

impl TimePoint {
    pub fn new(t: i64, value: f64) -> Self {
        Self { t, value }
    }
}

// ============================================================================
// MergedPoint: union of the price and MVRV time axes
// ============================================================================

/// Produced by the merger. A point carries one or both values depending on
/// whether the source series had samples inside the tolerance window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MergedPoint {
    pub t: i64,
    pub price: Option<f64>,
    pub mvrv: Option<f64>,
}

/// First and last timestamps of a series, when it has any.
pub fn series_range(series: &[TimePoint]) -> Option<(i64, i64)> {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => Some((first.t, last.t)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_range() {
        assert_eq!(series_range(&[]), None);

        let series = vec![
            TimePoint::new(100, 1.0),
            TimePoint::new(200, 2.0),
            TimePoint::new(300, 3.0),
        ];
        assert_eq!(series_range(&series), Some((100, 300)));
    }
}
