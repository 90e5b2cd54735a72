//! Validation utilities for the Farm Insight engine
//!
//! Pure checks shared by the engine's configuration layer and ingestion
//! callers. All functions return `Result<(), &'static str>` so callers can
//! wrap the message in their own error type.

use crate::models::Series;

/// Validate a threshold or confidence value lies in [0,1]
pub fn validate_unit_interval(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Value must be finite");
    }
    if !(0.0..=1.0).contains(&value) {
        return Err("Value must be between 0 and 1");
    }
    Ok(())
}

/// Validate a rolling-window sample count
pub fn validate_window_samples(samples: usize, minimum: usize) -> Result<(), &'static str> {
    if samples < minimum {
        return Err("Window sample count below minimum");
    }
    Ok(())
}

/// Validate a slope threshold (units per sample, must be positive and finite)
pub fn validate_slope_threshold(threshold: f64) -> Result<(), &'static str> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err("Slope threshold must be a positive finite number");
    }
    Ok(())
}

/// Validate the series ordering invariant: strictly increasing timestamps
pub fn validate_series_ordering(series: &Series) -> Result<(), &'static str> {
    for pair in series.samples.windows(2) {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err("Series timestamps must be strictly increasing");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        harvest_proximity_severity, HealthStatus, IrrigationStatus, RiskLevel, Sample,
        SunlightStatus,
    };
    use crate::types::Unit;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    #[test]
    fn test_unit_interval_accepts_bounds() {
        assert!(validate_unit_interval(0.0).is_ok());
        assert!(validate_unit_interval(0.7).is_ok());
        assert!(validate_unit_interval(1.0).is_ok());
    }

    #[test]
    fn test_unit_interval_rejects_out_of_range() {
        assert!(validate_unit_interval(-0.01).is_err());
        assert!(validate_unit_interval(1.01).is_err());
        assert!(validate_unit_interval(f64::NAN).is_err());
    }

    #[test]
    fn test_window_samples_minimum() {
        assert!(validate_window_samples(5, 5).is_ok());
        assert!(validate_window_samples(4, 5).is_err());
    }

    #[test]
    fn test_slope_threshold() {
        assert!(validate_slope_threshold(0.5).is_ok());
        assert!(validate_slope_threshold(0.0).is_err());
        assert!(validate_slope_threshold(f64::INFINITY).is_err());
    }

    #[test]
    fn test_series_ordering_valid() {
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let series = Series {
            samples: vec![
                Sample::new(t0, Decimal::from(1), Unit::Celsius),
                Sample::new(t0 + Duration::hours(1), Decimal::from(2), Unit::Celsius),
            ],
        };
        assert!(validate_series_ordering(&series).is_ok());
    }

    #[test]
    fn test_series_ordering_rejects_duplicate_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let series = Series {
            samples: vec![
                Sample::new(t0, Decimal::from(1), Unit::Celsius),
                Sample::new(t0, Decimal::from(2), Unit::Celsius),
            ],
        };
        assert!(validate_series_ordering(&series).is_err());
    }

    // ========================================================================
    // Severity table and risk bucketing
    // ========================================================================

    #[test]
    fn test_health_severity_table() {
        assert_eq!(HealthStatus::Excellent.severity(), 0.0);
        assert_eq!(HealthStatus::Good.severity(), 0.2);
        assert_eq!(HealthStatus::Fair.severity(), 0.45);
        assert_eq!(HealthStatus::Poor.severity(), 0.75);
    }

    #[test]
    fn test_irrigation_needs_water_severity() {
        assert_eq!(IrrigationStatus::NeedsWater.severity(), 0.6);
        assert_eq!(IrrigationStatus::Optimal.severity(), 0.0);
    }

    #[test]
    fn test_sunlight_severity_table() {
        assert_eq!(SunlightStatus::Optimal.severity(), 0.0);
        assert_eq!(SunlightStatus::NeedsMore.severity(), 0.4);
    }

    #[test]
    fn test_harvest_proximity_buckets() {
        assert_eq!(harvest_proximity_severity(3), 0.5);
        assert_eq!(harvest_proximity_severity(7), 0.5);
        assert_eq!(harvest_proximity_severity(10), 0.3);
        assert_eq!(harvest_proximity_severity(21), 0.0);
    }

    #[test]
    fn test_status_code_round_trip() {
        for status in [
            IrrigationStatus::Optimal,
            IrrigationStatus::NeedsWater,
            IrrigationStatus::Overwatered,
        ] {
            assert_eq!(IrrigationStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(IrrigationStatus::from_code(Decimal::from(99)), None);
    }

    #[test]
    fn test_risk_level_buckets() {
        assert_eq!(RiskLevel::from_magnitude(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_magnitude(0.33), RiskLevel::Low);
        assert_eq!(RiskLevel::from_magnitude(0.34), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_magnitude(0.6), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_magnitude(0.67), RiskLevel::High);
        assert_eq!(RiskLevel::from_magnitude(1.0), RiskLevel::High);
    }

    proptest::proptest! {
        /// Any magnitude in [0,1] buckets into exactly one level and the
        /// bucketing is monotone in the magnitude
        #[test]
        fn prop_risk_bucketing_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            proptest::prop_assert!(
                RiskLevel::from_magnitude(lo) <= RiskLevel::from_magnitude(hi)
            );
        }

        #[test]
        fn prop_unit_interval_accepts_in_range(v in 0.0f64..=1.0) {
            proptest::prop_assert!(validate_unit_interval(v).is_ok());
        }
    }
}
