//! Merge-join of the price and MVRV series onto one time axis.

use crate::config::DASHBOARD;
use crate::models::{MergedPoint, TimePoint};

/// Align two individually ascending series into one joined sequence.
///
/// Two-pointer walk: heads whose timestamps sit within the tolerance window
/// merge into a single point carrying both values; otherwise the earlier head
/// is emitted alone. A series that outlives the other is drained point by
/// point. This is a merge-join on nearly-aligned keys, not an exact-key join.
pub fn merge_series(price: &[TimePoint], mvrv: &[TimePoint]) -> Vec<MergedPoint> {
    let tolerance_ms = DASHBOARD.chart.merge_tolerance_ms;
    let mut merged: Vec<MergedPoint> = Vec::with_capacity(price.len().max(mvrv.len()));

    let mut i = 0;
    let mut j = 0;
    loop {
        match (price.get(i), mvrv.get(j)) {
            (Some(p), Some(m)) => {
                if (p.t - m.t).abs() <= tolerance_ms {
                    merged.push(MergedPoint {
                        t: p.t,
                        price: Some(p.value),
                        mvrv: Some(m.value),
                    });
                    i += 1;
                    j += 1;
                } else if p.t < m.t {
                    merged.push(MergedPoint {
                        t: p.t,
                        price: Some(p.value),
                        mvrv: None,
                    });
                    i += 1;
                } else {
                    merged.push(MergedPoint {
                        t: m.t,
                        price: None,
                        mvrv: Some(m.value),
                    });
                    j += 1;
                }
            }
            (Some(p), None) => {
                merged.push(MergedPoint {
                    t: p.t,
                    price: Some(p.value),
                    mvrv: None,
                });
                i += 1;
            }
            (None, Some(m)) => {
                merged.push(MergedPoint {
                    t: m.t,
                    price: None,
                    mvrv: Some(m.value),
                });
                j += 1;
            }
            (None, None) => break,
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    fn series(points: &[(i64, f64)]) -> Vec<TimePoint> {
        points.iter().map(|&(t, v)| TimePoint::new(t, v)).collect()
    }

    #[test]
    fn test_aligned_series_merge_pairwise() {
        let price = series(&[(0, 100.0), (1000, 101.0), (2000, 102.0)]);
        let mvrv = series(&[(0, 1.8), (1000, 1.9), (2000, 2.0)]);

        let merged = merge_series(&price, &mvrv);

        assert_eq!(merged.len(), 3, "Aligned inputs should merge 1:1");
        for point in &merged {
            assert!(point.price.is_some(), "Every point should carry a price");
            assert!(point.mvrv.is_some(), "Every point should carry an mvrv");
        }
        assert_eq!(merged[1].price, Some(101.0));
        assert_eq!(merged[1].mvrv, Some(1.9));
    }

    #[test]
    fn test_offset_beyond_tolerance_stays_separate() {
        // MVRV samples sit 13h after each price sample: outside the 12h window
        let offset = TimeUtils::MS_IN_H * 13;
        let price = series(&[(0, 100.0), (TimeUtils::MS_IN_D, 101.0)]);
        let mvrv = series(&[(offset, 1.8), (TimeUtils::MS_IN_D + offset, 1.9)]);

        let merged = merge_series(&price, &mvrv);

        assert_eq!(merged.len(), 4, "No pair is within tolerance");
        assert!(merged.iter().all(|p| p.price.is_none() || p.mvrv.is_none()));
        // Output stays ascending
        assert!(merged.windows(2).all(|w| w[0].t <= w[1].t));
    }

    #[test]
    fn test_half_day_offset_merges() {
        // 11h apart: inside the tolerance window
        let price = series(&[(0, 100.0)]);
        let mvrv = series(&[(TimeUtils::MS_IN_H * 11, 2.1)]);

        let merged = merge_series(&price, &mvrv);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].t, 0, "Merged point keeps the price timestamp");
        assert_eq!(merged[0].price, Some(100.0));
        assert_eq!(merged[0].mvrv, Some(2.1));
    }

    #[test]
    fn test_longer_series_drains() {
        let price = series(&[(0, 100.0)]);
        let mvrv = series(&[
            (0, 1.8),
            (TimeUtils::MS_IN_D, 1.9),
            (2 * TimeUtils::MS_IN_D, 2.0),
        ]);

        let merged = merge_series(&price, &mvrv);

        assert_eq!(merged.len(), 3);
        assert!(merged[0].price.is_some() && merged[0].mvrv.is_some());
        assert!(merged[1].price.is_none() && merged[1].mvrv.is_some());
        assert!(merged[2].price.is_none() && merged[2].mvrv.is_some());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_series(&[], &[]).is_empty());

        let price = series(&[(0, 100.0)]);
        let merged = merge_series(&price, &[]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].mvrv, None);
    }
}
