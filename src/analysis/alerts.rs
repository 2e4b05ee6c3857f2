//! Threshold alerting over the current metric snapshot.

use crate::config::DASHBOARD;
use crate::models::{Alert, AlertLevel};

/// Evaluate the fixed threshold rules against the current MVRV and sentiment
/// values.
///
/// Rules are independent and additive, so both signals may fire in the same
/// evaluation. The two MVRV tiers are mutually exclusive and tested in
/// descending threshold order. An unknown input never fires for that signal.
/// Pure function of the two values: no retained state, no hysteresis.
pub fn evaluate_alerts(mvrv: Option<f64>, sentiment: Option<f64>) -> Vec<Alert> {
    let thresholds = &DASHBOARD.alerts;
    let mut alerts = Vec::new();

    if let Some(value) = mvrv {
        if value >= thresholds.mvrv_overbought {
            alerts.push(Alert {
                level: AlertLevel::High,
                title: "Overbought".to_string(),
                description: format!(
                    "MVRV at {:.2} is above the {:.1} overbought threshold",
                    value, thresholds.mvrv_overbought
                ),
            });
        } else if value >= thresholds.mvrv_elevated {
            alerts.push(Alert {
                level: AlertLevel::Medium,
                title: "Elevated".to_string(),
                description: format!(
                    "MVRV at {:.2} is above the {:.1} elevated threshold",
                    value, thresholds.mvrv_elevated
                ),
            });
        }
    }

    if let Some(value) = sentiment {
        if value >= thresholds.greed_extreme {
            alerts.push(Alert {
                level: AlertLevel::Medium,
                title: "Extreme Greed".to_string(),
                description: format!("Fear & Greed index at {:.0}", value),
            });
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_signals_fire() {
        let alerts = evaluate_alerts(Some(3.1), Some(80.0));

        assert_eq!(alerts.len(), 2, "Rules are additive");
        assert_eq!(alerts[0].level, AlertLevel::High);
        assert_eq!(alerts[0].title, "Overbought");
        assert_eq!(alerts[1].level, AlertLevel::Medium);
        assert_eq!(alerts[1].title, "Extreme Greed");
    }

    #[test]
    fn test_elevated_tier_only() {
        let alerts = evaluate_alerts(Some(2.6), Some(50.0));

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Medium);
        assert_eq!(alerts[0].title, "Elevated");
        assert!(
            alerts[0].description.contains("2.60"),
            "Message states the value to two decimals: {}",
            alerts[0].description
        );
        assert!(alerts[0].description.contains("2.5"));
    }

    #[test]
    fn test_calm_snapshot_fires_nothing() {
        assert!(evaluate_alerts(Some(1.0), Some(20.0)).is_empty());
    }

    #[test]
    fn test_mvrv_tiers_mutually_exclusive() {
        // 3.1 clears both thresholds but only the higher tier fires
        let alerts = evaluate_alerts(Some(3.1), None);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Overbought");
        assert!(alerts[0].description.contains("3.10"));
    }

    #[test]
    fn test_unknown_inputs_never_fire() {
        assert!(evaluate_alerts(None, None).is_empty());
        assert_eq!(evaluate_alerts(None, Some(90.0)).len(), 1);
        assert_eq!(evaluate_alerts(Some(3.5), None).len(), 1);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(evaluate_alerts(Some(3.0), None)[0].title, "Overbought");
        assert_eq!(evaluate_alerts(Some(2.5), None)[0].title, "Elevated");
        assert_eq!(evaluate_alerts(None, Some(70.0))[0].title, "Extreme Greed");
    }
}
