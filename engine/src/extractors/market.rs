//! Commodity market signal extraction
//!
//! Classifies the trailing-window price change as a trend once it clears a
//! configurable noise floor, and flags unusually choppy series with a
//! volatility breach computed from period-over-period returns.

use tracing::debug;

use shared::{Metric, Signal, SignalKind};

use crate::config::EngineConfig;
use crate::extractors::{std_dev, values_f64, SeriesSlice, SignalExtractor};

pub struct MarketExtractor<'a> {
    config: &'a EngineConfig,
}

impl<'a> MarketExtractor<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Fractional period-over-period returns; periods starting at zero are
    /// skipped rather than dividing by zero
    fn returns(values: &[f64]) -> Vec<f64> {
        values
            .windows(2)
            .filter(|pair| pair[0] != 0.0)
            .map(|pair| (pair[1] - pair[0]) / pair[0])
            .collect()
    }
}

impl SignalExtractor for MarketExtractor<'_> {
    fn extract(&self, series: &SeriesSlice<'_>) -> Vec<Signal> {
        if series.metric != Metric::Price || series.samples.len() < 2 {
            return Vec::new();
        }
        let values = values_f64(series.samples);
        if values.len() < 2 {
            return Vec::new();
        }
        let observed_at = match series.samples.last() {
            Some(sample) => sample.timestamp,
            None => return Vec::new(),
        };

        let mut signals = Vec::new();

        // Trailing-window percentage change, first sample to last
        let first = values[0];
        let last = values[values.len() - 1];
        if first != 0.0 {
            let change = (last - first) / first;
            if change.abs() > self.config.market_noise_floor {
                let kind = if change > 0.0 {
                    SignalKind::TrendUp
                } else {
                    SignalKind::TrendDown
                };
                signals.push(Signal::new(
                    series.entity_id.clone(),
                    kind,
                    Metric::Price,
                    change.abs().min(1.0),
                    observed_at,
                ));
            }
        }

        // Volatility: std-dev of returns, saturating at twice the threshold
        let volatility = std_dev(&Self::returns(&values));
        if volatility > self.config.market_volatility_threshold {
            let magnitude = (volatility / (2.0 * self.config.market_volatility_threshold)).min(1.0);
            signals.push(Signal::new(
                series.entity_id.clone(),
                SignalKind::ThresholdBreach,
                Metric::Price,
                magnitude,
                observed_at,
            ));
        }

        debug!(
            entity = %series.entity_id,
            volatility,
            count = signals.len(),
            "market extraction complete"
        );
        signals
    }
}
