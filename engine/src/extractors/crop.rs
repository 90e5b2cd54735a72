//! Crop telemetry signal extraction
//!
//! Crop series carry encoded categorical statuses plus days-till-harvest.
//! The extractor decodes the latest sample per metric and maps it through
//! the fixed severity table; one `ThresholdBreach` is emitted per monitored
//! attribute that deviates from optimal.

use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use shared::{
    harvest_proximity_severity, HealthStatus, IrrigationStatus, Metric, Sample, Signal,
    SignalKind, SunlightStatus,
};

use crate::extractors::{SeriesSlice, SignalExtractor};

#[derive(Debug, Default)]
pub struct CropExtractor;

impl CropExtractor {
    pub fn new() -> Self {
        Self
    }

    fn severity_of(&self, metric: Metric, sample: &Sample) -> Option<f64> {
        match metric {
            Metric::CropHealth => HealthStatus::from_code(sample.value).map(|s| s.severity()),
            Metric::Irrigation => IrrigationStatus::from_code(sample.value).map(|s| s.severity()),
            Metric::Sunlight => SunlightStatus::from_code(sample.value).map(|s| s.severity()),
            Metric::DaysTillHarvest => sample.value.to_i64().map(harvest_proximity_severity),
            _ => None,
        }
    }
}

impl SignalExtractor for CropExtractor {
    fn extract(&self, series: &SeriesSlice<'_>) -> Vec<Signal> {
        let Some(latest) = series.samples.last() else {
            return Vec::new();
        };

        let Some(severity) = self.severity_of(series.metric, latest) else {
            warn!(
                entity = %series.entity_id,
                metric = %series.metric,
                value = %latest.value,
                "unrecognized crop status code; skipping"
            );
            return Vec::new();
        };

        if severity <= 0.0 {
            debug!(
                entity = %series.entity_id,
                metric = %series.metric,
                "attribute at optimal; no signal"
            );
            return Vec::new();
        }

        vec![Signal::new(
            series.entity_id.clone(),
            SignalKind::ThresholdBreach,
            series.metric,
            severity,
            latest.timestamp,
        )]
    }
}
