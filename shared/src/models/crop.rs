//! Crop telemetry status models
//!
//! Categorical crop statuses travel through the time-series store as encoded
//! numeric samples (`Unit::Code`). The code tables and the severity mapping
//! below are the single source of truth for both directions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overall crop health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    pub fn code(&self) -> Decimal {
        Decimal::from(match self {
            HealthStatus::Excellent => 0,
            HealthStatus::Good => 1,
            HealthStatus::Fair => 2,
            HealthStatus::Poor => 3,
        })
    }

    pub fn from_code(code: Decimal) -> Option<Self> {
        match code.to_i64()? {
            0 => Some(HealthStatus::Excellent),
            1 => Some(HealthStatus::Good),
            2 => Some(HealthStatus::Fair),
            3 => Some(HealthStatus::Poor),
            _ => None,
        }
    }

    /// Deviation-from-optimal magnitude in [0,1]
    pub fn severity(&self) -> f64 {
        match self {
            HealthStatus::Excellent => 0.0,
            HealthStatus::Good => 0.2,
            HealthStatus::Fair => 0.45,
            HealthStatus::Poor => 0.75,
        }
    }
}

/// Irrigation status of a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IrrigationStatus {
    Optimal,
    NeedsWater,
    Overwatered,
}

impl IrrigationStatus {
    pub fn code(&self) -> Decimal {
        Decimal::from(match self {
            IrrigationStatus::Optimal => 0,
            IrrigationStatus::NeedsWater => 1,
            IrrigationStatus::Overwatered => 2,
        })
    }

    pub fn from_code(code: Decimal) -> Option<Self> {
        match code.to_i64()? {
            0 => Some(IrrigationStatus::Optimal),
            1 => Some(IrrigationStatus::NeedsWater),
            2 => Some(IrrigationStatus::Overwatered),
            _ => None,
        }
    }

    pub fn severity(&self) -> f64 {
        match self {
            IrrigationStatus::Optimal => 0.0,
            IrrigationStatus::NeedsWater => 0.6,
            IrrigationStatus::Overwatered => 0.5,
        }
    }
}

/// Sunlight exposure status of a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SunlightStatus {
    Optimal,
    NeedsMore,
    Excessive,
}

impl SunlightStatus {
    pub fn code(&self) -> Decimal {
        Decimal::from(match self {
            SunlightStatus::Optimal => 0,
            SunlightStatus::NeedsMore => 1,
            SunlightStatus::Excessive => 2,
        })
    }

    pub fn from_code(code: Decimal) -> Option<Self> {
        match code.to_i64()? {
            0 => Some(SunlightStatus::Optimal),
            1 => Some(SunlightStatus::NeedsMore),
            2 => Some(SunlightStatus::Excessive),
            _ => None,
        }
    }

    pub fn severity(&self) -> f64 {
        match self {
            SunlightStatus::Optimal => 0.0,
            SunlightStatus::NeedsMore => 0.4,
            SunlightStatus::Excessive => 0.35,
        }
    }
}

/// Severity of an approaching harvest deadline.
///
/// A crop within two weeks of harvest needs scheduling attention; within one
/// week it becomes pressing. Values are tunable against agronomic data.
pub fn harvest_proximity_severity(days_till_harvest: i64) -> f64 {
    if days_till_harvest <= 7 {
        0.5
    } else if days_till_harvest <= 14 {
        0.3
    } else {
        0.0
    }
}
