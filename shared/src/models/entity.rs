//! Entities the engine evaluates

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Metric};

/// Kind tag for an evaluated entity.
///
/// Variant names are part of the presentation contract and serialize
/// verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Crop,
    Commodity,
    WeatherStation,
}

impl EntityKind {
    /// Metrics an entity of this kind is monitored on by default
    pub fn default_metrics(&self) -> Vec<Metric> {
        match self {
            EntityKind::Crop => vec![
                Metric::CropHealth,
                Metric::Irrigation,
                Metric::Sunlight,
                Metric::DaysTillHarvest,
            ],
            EntityKind::Commodity => vec![Metric::Price],
            EntityKind::WeatherStation => vec![Metric::Temperature, Metric::Precipitation],
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Crop => write!(f, "Crop"),
            EntityKind::Commodity => write!(f, "Commodity"),
            EntityKind::WeatherStation => write!(f, "WeatherStation"),
        }
    }
}

/// An evaluated entity and the metrics it references.
///
/// Every referenced metric must have a recorded series at evaluation time;
/// the facade rejects the snapshot otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub metrics: Vec<Metric>,
}

impl Entity {
    /// Create an entity monitored on the default metrics for its kind
    pub fn new(id: impl Into<EntityId>, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            metrics: kind.default_metrics(),
        }
    }

    pub fn with_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.metrics = metrics;
        self
    }
}
