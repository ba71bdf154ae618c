use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{DailyPoint, HourlyPoint, SignedChange};

/// Scalar indicators shown next to the charts
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub total_volume: f64,
    pub sh_index: f64,
    pub sh_change: SignedChange,
    pub sz_index: f64,
    pub sz_change: SignedChange,
    /// Latest cumulative volume against the previous trading day's total.
    /// Absent with fewer than two daily points.
    pub volume_change: Option<SignedChange>,
}

/// Service deriving comparison metrics from a snapshot
#[derive(Debug, Clone, Default)]
pub struct MetricDeriver;

impl MetricDeriver {
    pub fn new() -> Self {
        Self
    }

    /// Passthrough of the latest tick plus the day-over-day volume change.
    ///
    /// A zero previous-day volume is not guarded: the change becomes
    /// `inf` or `NaN` and is rendered as such.
    pub fn derive(&self, latest: &HourlyPoint, daily: &[DailyPoint]) -> DerivedMetrics {
        let volume_change = Self::volume_change_pct(latest.total_volume, daily).map(SignedChange::new);

        if let Some(change) = &volume_change {
            if !change.pct.is_finite() {
                get_logger().warn(
                    LogComponent::Domain("MetricDeriver"),
                    &format!("non-finite volume change ({}) against zero prior volume", change.pct),
                );
            }
        }

        DerivedMetrics {
            total_volume: latest.total_volume,
            sh_index: latest.sh_index,
            sh_change: SignedChange::new(latest.sh_change_pct),
            sz_index: latest.sz_index,
            sz_change: SignedChange::new(latest.sz_change_pct),
            volume_change,
        }
    }

    /// `(latest - prior) / prior * 100`, prior being the second-to-last day.
    pub fn volume_change_pct(latest_volume: f64, daily: &[DailyPoint]) -> Option<f64> {
        let prior = daily.len().checked_sub(2).map(|idx| &daily[idx])?;
        Some((latest_volume - prior.total_volume) / prior.total_volume * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(volume: f64, sh_pct: f64, sz_pct: f64) -> HourlyPoint {
        HourlyPoint {
            hour: "10:30".into(),
            total_volume: volume,
            sh_index: 3350.0,
            sh_change_pct: sh_pct,
            sz_index: 10100.0,
            sz_change_pct: sz_pct,
        }
    }

    fn day(date: &str, volume: f64) -> DailyPoint {
        DailyPoint { date: date.into(), total_volume: volume }
    }

    #[test]
    fn volume_change_absent_with_short_history() {
        let deriver = MetricDeriver::new();
        assert!(deriver.derive(&hourly(250.0, 0.0, 0.0), &[]).volume_change.is_none());
        assert!(
            deriver
                .derive(&hourly(250.0, 0.0, 0.0), &[day("06-01", 5000.0)])
                .volume_change
                .is_none()
        );
    }

    #[test]
    fn volume_change_uses_second_to_last_day() {
        let daily = [day("05-31", 1000.0), day("06-01", 5000.0), day("06-02", 6000.0)];
        let pct = MetricDeriver::volume_change_pct(6000.0, &daily).unwrap();
        assert!((pct - 20.0).abs() < 1e-12);
    }

    #[test]
    fn passthrough_and_sign_classes() {
        let metrics = MetricDeriver::new().derive(&hourly(250.0, 0.0, -1.5), &[]);
        assert_eq!(metrics.total_volume, 250.0);
        assert_eq!(metrics.sh_index, 3350.0);
        assert_eq!(metrics.sh_change.class, crate::domain::market_data::SignClass::Positive);
        assert_eq!(metrics.sz_change.class, crate::domain::market_data::SignClass::Negative);
    }

    #[test]
    fn zero_prior_volume_propagates_ieee_values() {
        let daily = [day("06-01", 0.0), day("06-02", 10.0)];
        assert_eq!(MetricDeriver::volume_change_pct(10.0, &daily), Some(f64::INFINITY));
        assert!(MetricDeriver::volume_change_pct(0.0, &daily).unwrap().is_nan());
    }
}
