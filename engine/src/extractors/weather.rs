//! Weather signal extraction
//!
//! Works on forecast series from a weather station: precipitation
//! probability (percent samples) and temperature. Precipitation produces
//! threshold breaches for high rain and drought; temperature produces trend
//! signals from a linear fit over the rolling window.

use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use shared::{Metric, Signal, SignalKind};

use crate::config::EngineConfig;
use crate::extractors::{linear_slope, values_f64, SeriesSlice, SignalExtractor};

/// Magnitude scale for temperature slopes: a slope of 5 units/sample or
/// steeper saturates at 1.0
const SLOPE_MAGNITUDE_SCALE: f64 = 5.0;

pub struct WeatherExtractor<'a> {
    config: &'a EngineConfig,
}

impl<'a> WeatherExtractor<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// High-rain and drought breaches over the rolling precipitation window.
    /// Probability samples are recorded as percent (0-100) and compared
    /// against normalized thresholds.
    fn extract_precipitation(&self, series: &SeriesSlice<'_>) -> Vec<Signal> {
        let mut signals = Vec::new();
        let window_len = self.config.precip_window_samples;
        let start = series.samples.len().saturating_sub(window_len);
        let window = &series.samples[start..];

        // High rain: the wettest forecast in the window crosses the threshold
        let wettest = window
            .iter()
            .filter_map(|s| s.value.to_f64().map(|v| (s, v / 100.0)))
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((sample, probability)) = wettest {
            if probability >= self.config.rain_threshold_high {
                signals.push(Signal::new(
                    series.entity_id.clone(),
                    SignalKind::ThresholdBreach,
                    Metric::Precipitation,
                    probability,
                    sample.timestamp,
                ));
            }
        }

        // Drought: every sample in the trailing drought window is at or
        // below the drought threshold
        let drought_len = self.config.drought_window_samples;
        if window.len() >= drought_len {
            let tail = &window[window.len() - drought_len..];
            let probabilities: Vec<f64> = tail
                .iter()
                .filter_map(|s| s.value.to_f64().map(|v| v / 100.0))
                .collect();
            let all_dry = probabilities.len() == drought_len
                && probabilities
                    .iter()
                    .all(|p| *p <= self.config.drought_threshold);
            if all_dry {
                let mean = probabilities.iter().sum::<f64>() / drought_len as f64;
                let deficit = if self.config.drought_threshold > 0.0 {
                    (self.config.drought_threshold - mean) / self.config.drought_threshold
                } else {
                    1.0
                };
                // Any sustained dry spell is at least Moderate; a bone-dry
                // window approaches 1.0
                let magnitude = 0.5 + 0.5 * deficit.clamp(0.0, 1.0);
                if let Some(last) = tail.last() {
                    signals.push(Signal::new(
                        series.entity_id.clone(),
                        SignalKind::ThresholdBreach,
                        Metric::Precipitation,
                        magnitude,
                        last.timestamp,
                    ));
                }
            }
        }

        signals
    }

    /// Temperature trend from the least-squares slope over the window.
    /// Within the slope threshold the series is reported as `Stable` so the
    /// scorer sees positive evidence of calm conditions.
    fn extract_temperature(&self, series: &SeriesSlice<'_>) -> Vec<Signal> {
        let window_len = self.config.precip_window_samples;
        let start = series.samples.len().saturating_sub(window_len);
        let window = &series.samples[start..];
        if window.len() < 2 {
            return Vec::new();
        }

        let values = values_f64(window);
        let slope = linear_slope(&values);
        let observed_at = match window.last() {
            Some(sample) => sample.timestamp,
            None => return Vec::new(),
        };

        let kind = if slope > self.config.temperature_slope_threshold {
            SignalKind::TrendUp
        } else if slope < -self.config.temperature_slope_threshold {
            SignalKind::TrendDown
        } else {
            SignalKind::Stable
        };
        let magnitude = if kind == SignalKind::Stable {
            0.0
        } else {
            (slope.abs() / SLOPE_MAGNITUDE_SCALE).min(1.0)
        };

        vec![Signal::new(
            series.entity_id.clone(),
            kind,
            Metric::Temperature,
            magnitude,
            observed_at,
        )]
    }
}

impl SignalExtractor for WeatherExtractor<'_> {
    fn extract(&self, series: &SeriesSlice<'_>) -> Vec<Signal> {
        if series.samples.is_empty() {
            return Vec::new();
        }
        let signals = match series.metric {
            Metric::Precipitation => self.extract_precipitation(series),
            Metric::Temperature => self.extract_temperature(series),
            _ => Vec::new(),
        };
        debug!(
            entity = %series.entity_id,
            metric = %series.metric,
            count = signals.len(),
            "weather extraction complete"
        );
        signals
    }
}
