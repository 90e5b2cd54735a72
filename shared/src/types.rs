//! Common types used across the engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for an entity (crop, commodity, or weather station).
///
/// Caller-supplied and opaque to the engine. Lexical ordering of the inner
/// string is the final recommendation tie-break, so identifiers should be
/// stable across evaluations (e.g. "crop:wheat").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Metrics the engine knows how to analyze
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Precipitation,
    Price,
    CropHealth,
    Irrigation,
    Sunlight,
    DaysTillHarvest,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Metric::Temperature => "temperature",
            Metric::Precipitation => "precipitation",
            Metric::Price => "price",
            Metric::CropHealth => "crop_health",
            Metric::Irrigation => "irrigation",
            Metric::Sunlight => "sunlight",
            Metric::DaysTillHarvest => "days_till_harvest",
        };
        write!(f, "{}", name)
    }
}

/// Measurement units for recorded samples
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Celsius,
    Percent,
    Millimeters,
    UsdPerBushel,
    Days,
    /// Encoded categorical status (see crop status code tables)
    Code,
}

/// Inclusive time window over which samples are queried and evaluated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Both bounds are inclusive
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }

    /// A window with `end` before `start` matches no samples
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}
