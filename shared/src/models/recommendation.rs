//! Recommendation models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{EntityId, TimeWindow};

/// A prioritized, explainable action recommendation.
///
/// Created fresh on each aggregation call and never mutated afterwards;
/// consumers treat it as a value, not a reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: Uuid,
    pub entity_id: EntityId,
    pub action: String,
    pub rationale: String,
    pub timing: TimeWindow,
    pub confidence: f64,
    /// Risk-level weight times confidence, scaled by 100 and rounded
    pub priority: i32,
}
