//! Risk assessment models

use serde::{Deserialize, Serialize};

use crate::models::Signal;
use crate::types::EntityId;

/// Coarse severity bucket summarizing an entity's current signals.
///
/// Variant names are part of the presentation contract and serialize
/// verbatim. Ordering is by severity (`Low < Moderate < High`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Bucket a [0,1] magnitude: Low below 0.34, Moderate below 0.67,
    /// High at 0.67 and above
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= 0.67 {
            RiskLevel::High
        } else if magnitude >= 0.34 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Priority weight used by the recommendation ranker
    pub fn weight(&self) -> f64 {
        match self {
            RiskLevel::Low => 1.0,
            RiskLevel::Moderate => 2.0,
            RiskLevel::High => 3.0,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Per-entity risk summary with the signals that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub entity_id: EntityId,
    pub level: RiskLevel,
    /// Agreement among contributing signals in [0,1]; not a p-value
    pub confidence: f64,
    pub contributing_signals: Vec<Signal>,
}
