//! Evaluation input and output envelopes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entity, Recommendation, RiskAssessment};
use crate::types::TimeWindow;

/// The set of entities and the time window over which an evaluation runs.
///
/// Replaces any notion of process-wide "current farm state": everything the
/// engine evaluates arrives through this argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub entities: Vec<Entity>,
    pub window: TimeWindow,
}

impl Snapshot {
    pub fn new(entities: Vec<Entity>, window: TimeWindow) -> Self {
        Self { entities, window }
    }
}

/// Output of a single aggregation call.
///
/// Plain data with no behavior; serializes to JSON for direct consumption by
/// any front end. Field names and enum variant strings are the stable
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub risk_assessments: Vec<RiskAssessment>,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RiskLevel, Signal, SignalKind};
    use crate::types::EntityId;
    use chrono::TimeZone;

    /// Field names and enum variant strings are the presentation contract
    #[test]
    fn test_result_serializes_with_contract_names() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let signal = Signal::new(
            EntityId::new("crop:corn"),
            SignalKind::TrendUp,
            crate::types::Metric::Price,
            0.5,
            now,
        );
        let result = AggregationResult {
            risk_assessments: vec![RiskAssessment {
                entity_id: EntityId::new("crop:corn"),
                level: RiskLevel::Moderate,
                confidence: 0.9,
                contributing_signals: vec![signal],
            }],
            recommendations: Vec::new(),
            generated_at: now,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("riskAssessments").is_some());
        assert!(json.get("generatedAt").is_some());

        let assessment = &json["riskAssessments"][0];
        assert_eq!(assessment["entityId"], "crop:corn");
        assert_eq!(assessment["level"], "Moderate");
        assert_eq!(assessment["contributingSignals"][0]["kind"], "TrendUp");
        assert!(assessment["contributingSignals"][0]["observedAt"].is_string());
    }
}
