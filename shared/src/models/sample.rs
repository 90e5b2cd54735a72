//! Recorded time-series samples

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{TimeWindow, Unit};

/// A single recorded observation. Immutable once appended to a series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: Decimal,
    pub unit: Unit,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: Decimal, unit: Unit) -> Self {
        Self {
            timestamp,
            value,
            unit,
        }
    }
}

/// Ordered samples for one (entity, metric) key.
///
/// Ordering invariant: strictly increasing timestamps, no duplicates. The
/// store enforces the invariant at append time; `Series` itself only holds
/// already-validated data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Series {
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.samples.last().map(|s| s.timestamp)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples whose timestamp falls within the window (inclusive bounds),
    /// in ascending order. An empty window yields an empty vec.
    pub fn in_window(&self, window: &TimeWindow) -> Vec<Sample> {
        if window.is_empty() {
            return Vec::new();
        }
        self.samples
            .iter()
            .filter(|s| window.contains(s.timestamp))
            .cloned()
            .collect()
    }
}
