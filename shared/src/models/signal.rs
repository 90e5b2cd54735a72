//! Derived signals
//!
//! Signals are recomputed on every evaluation and never persisted; they exist
//! only inside a single `evaluate` call and its result object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Metric};

/// Kind of a derived signal.
///
/// Variant names are part of the presentation contract and serialize
/// verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignalKind {
    TrendUp,
    TrendDown,
    ThresholdBreach,
    Stable,
}

/// Directional sign of a signal, used by the scorer's agreement measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl SignalKind {
    pub fn direction(&self) -> Direction {
        match self {
            SignalKind::TrendUp => Direction::Up,
            SignalKind::TrendDown => Direction::Down,
            SignalKind::ThresholdBreach | SignalKind::Stable => Direction::Neutral,
        }
    }
}

/// A normalized, typed observation extracted from a raw time series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub entity_id: EntityId,
    pub kind: SignalKind,
    pub metric: Metric,
    /// Normalized strength in [0,1]
    pub magnitude: f64,
    pub observed_at: DateTime<Utc>,
}

impl Signal {
    pub fn new(
        entity_id: EntityId,
        kind: SignalKind,
        metric: Metric,
        magnitude: f64,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            entity_id,
            kind,
            metric,
            magnitude: magnitude.clamp(0.0, 1.0),
            observed_at,
        }
    }
}
