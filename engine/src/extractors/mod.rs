//! Per-domain signal extractors
//!
//! Each domain (weather, crop, market) implements the `SignalExtractor`
//! capability independently, so a new domain adds a variant here without
//! touching the scorer or ranker. Extractors are pure: same series in, same
//! signals out, and an empty result is a valid, common outcome.

mod crop;
mod market;
mod weather;

pub use crop::CropExtractor;
pub use market::MarketExtractor;
pub use weather::WeatherExtractor;

use rust_decimal::prelude::ToPrimitive;

use shared::{EntityId, Metric, Sample, Signal};

/// Borrowed view of one queried series, as handed to an extractor
#[derive(Debug, Clone, Copy)]
pub struct SeriesSlice<'a> {
    pub entity_id: &'a EntityId,
    pub metric: Metric,
    pub samples: &'a [Sample],
}

/// Capability implemented by every domain extractor.
///
/// If a series yields both threshold-breach and trend signals in the same
/// evaluation, both are emitted; the scorer resolves priority, not the
/// extractor.
pub trait SignalExtractor {
    fn extract(&self, series: &SeriesSlice<'_>) -> Vec<Signal>;
}

/// Sample values as f64 for statistics; non-representable values are skipped
pub(crate) fn values_f64(samples: &[Sample]) -> Vec<f64> {
    samples.iter().filter_map(|s| s.value.to_f64()).collect()
}

/// Least-squares slope of values against sample index (units per sample).
/// Returns 0.0 when fewer than two points are given.
pub(crate) fn linear_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n_f;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Population standard deviation. Returns 0.0 for fewer than two points.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    variance.sqrt()
}
