//! In-memory time-series store
//!
//! Holds ordered, typed samples per (entity, metric) key. Samples are
//! immutable once appended, so reads never need to copy-on-write: the store
//! takes a read lock for queries and a write lock only for `append`, giving
//! single-writer-per-key discipline with unlimited concurrent readers.

use std::collections::HashMap;
use std::sync::RwLock;

use shared::{EntityId, Metric, Sample, Series, TimeWindow};

use crate::error::{EngineError, EngineResult};

/// Key for one recorded series
pub type SeriesKey = (EntityId, Metric);

/// Thread-safe store of recorded series.
///
/// `append` is the sole write interface; an asynchronous ingestion pipeline
/// feeding live data sits outside this core and calls nothing else.
#[derive(Debug, Default)]
pub struct TimeSeriesStore {
    series: RwLock<HashMap<SeriesKey, Series>>,
}

impl TimeSeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the series for (entity, metric).
    ///
    /// Rejects samples whose timestamp is not strictly after the last
    /// recorded timestamp for that key; the store is left untouched on
    /// rejection.
    pub fn append(
        &self,
        entity_id: EntityId,
        metric: Metric,
        sample: Sample,
    ) -> EngineResult<()> {
        let mut series = self
            .series
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = series.entry((entity_id.clone(), metric)).or_default();
        if let Some(last) = entry.last_timestamp() {
            if sample.timestamp <= last {
                return Err(EngineError::OutOfOrderSample {
                    entity_id,
                    metric,
                    attempted: sample.timestamp,
                    last_recorded: last,
                });
            }
        }
        entry.samples.push(sample);
        Ok(())
    }

    /// Samples for (entity, metric) within the window (inclusive bounds),
    /// ascending by timestamp. An empty window or unknown key yields an
    /// empty vec, never an error.
    pub fn query(&self, entity_id: &EntityId, metric: Metric, window: &TimeWindow) -> Vec<Sample> {
        let series = self
            .series
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        series
            .get(&(entity_id.clone(), metric))
            .map(|s| s.in_window(window))
            .unwrap_or_default()
    }

    /// Whether any samples have been recorded for (entity, metric)
    pub fn contains_series(&self, entity_id: &EntityId, metric: Metric) -> bool {
        let series = self
            .series
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        series
            .get(&(entity_id.clone(), metric))
            .is_some_and(|s| !s.is_empty())
    }

    /// Number of recorded series
    pub fn len(&self) -> usize {
        self.series
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
