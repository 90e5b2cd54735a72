//! Configuration for the Farm Insight engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (the documented defaults)
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FIE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use shared::{validate_slope_threshold, validate_unit_interval, validate_window_samples, RiskLevel};

use crate::error::{EngineError, EngineResult};

/// Engine configuration. All thresholds are normalized fractions in [0,1].
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineConfig {
    /// Precipitation probability at or above which a high-rain breach is
    /// emitted
    pub rain_threshold_high: f64,

    /// Precipitation probability at or below which samples count toward a
    /// drought breach
    pub drought_threshold: f64,

    /// Consecutive low-precipitation samples required for a drought breach
    pub drought_window_samples: usize,

    /// Rolling window length for precipitation analysis
    pub precip_window_samples: usize,

    /// Temperature slope (units per sample) beyond which a trend is emitted
    pub temperature_slope_threshold: f64,

    /// Fractional price change below which market movement is noise
    pub market_noise_floor: f64,

    /// Std-dev of period-over-period returns above which a volatility
    /// breach is emitted
    pub market_volatility_threshold: f64,

    /// Minimum risk level for an assessment to produce a recommendation
    pub action_risk_threshold: RiskLevel,

    /// Confidence at or above which a recommendation is produced regardless
    /// of risk level
    pub high_confidence_override: f64,

    /// Cap on ranked recommendations; `None` means unbounded
    pub max_recommendations: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rain_threshold_high: 0.70,
            drought_threshold: 0.05,
            drought_window_samples: 5,
            precip_window_samples: 7,
            temperature_slope_threshold: 0.5,
            market_noise_floor: 0.01,
            market_volatility_threshold: 0.05,
            action_risk_threshold: RiskLevel::Moderate,
            high_confidence_override: 0.8,
            max_recommendations: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FIE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("FIE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Missing keys fall back to the in-code defaults via #[serde(default)]
        config.try_deserialize()
    }

    /// Fail fast on out-of-range values before the engine is constructed
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |field: &str, reason: &str| {
            EngineError::InvalidConfiguration(format!("{}: {}", field, reason))
        };

        validate_unit_interval(self.rain_threshold_high)
            .map_err(|e| invalid("rain_threshold_high", e))?;
        validate_unit_interval(self.drought_threshold)
            .map_err(|e| invalid("drought_threshold", e))?;
        validate_unit_interval(self.market_noise_floor)
            .map_err(|e| invalid("market_noise_floor", e))?;
        validate_unit_interval(self.market_volatility_threshold)
            .map_err(|e| invalid("market_volatility_threshold", e))?;
        validate_unit_interval(self.high_confidence_override)
            .map_err(|e| invalid("high_confidence_override", e))?;
        validate_window_samples(self.drought_window_samples, 5)
            .map_err(|e| invalid("drought_window_samples", e))?;
        validate_window_samples(self.precip_window_samples, 2)
            .map_err(|e| invalid("precip_window_samples", e))?;
        validate_slope_threshold(self.temperature_slope_threshold)
            .map_err(|e| invalid("temperature_slope_threshold", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_without_files_falls_back_to_defaults() {
        let loaded = EngineConfig::load().unwrap();
        assert_eq!(loaded.rain_threshold_high, 0.70);
        assert_eq!(loaded.drought_window_samples, 5);
        assert_eq!(loaded.action_risk_threshold, RiskLevel::Moderate);
        assert_eq!(loaded.max_recommendations, None);
    }

    #[test]
    fn test_threshold_outside_unit_interval_rejected() {
        let config = EngineConfig {
            rain_threshold_high: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("rain_threshold_high"));
    }

    #[test]
    fn test_drought_window_below_minimum_rejected() {
        let config = EngineConfig {
            drought_window_samples: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_slope_threshold_rejected() {
        let config = EngineConfig {
            temperature_slope_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
