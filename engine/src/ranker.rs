//! Recommendation ranking
//!
//! Turns scored assessments into prioritized, deduplicated recommendations.
//! The rule table is keyed by (entity kind, dominant signal kind); crop
//! breaches refine by metric, since "needs water" and "approaching harvest"
//! call for different actions.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use shared::{
    EntityKind, Metric, Recommendation, RiskAssessment, Signal, SignalKind, TimeWindow,
};

use crate::config::EngineConfig;

/// An action template with its default timing window (days from now)
struct Rule {
    action: &'static str,
    rationale: String,
    start_days: i64,
    end_days: i64,
}

/// Rank all assessments across entities.
///
/// Eligible assessments are those at or above the action risk threshold, or
/// with confidence at or above the high-confidence override regardless of
/// level. Output is sorted by descending priority, ties broken by earliest
/// timing start then entity id, and only then truncated.
pub fn rank(
    assessments: &[(EntityKind, RiskAssessment)],
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for (kind, assessment) in assessments {
        let eligible = assessment.level >= config.action_risk_threshold
            || assessment.confidence >= config.high_confidence_override;
        if !eligible {
            continue;
        }
        let Some(dominant) = dominant_signal(&assessment.contributing_signals) else {
            continue;
        };
        let Some(rule) = rule_for(*kind, dominant) else {
            continue;
        };

        let priority = (assessment.level.weight() * assessment.confidence * 100.0).round() as i32;
        recommendations.push(Recommendation {
            id: Uuid::new_v4(),
            entity_id: assessment.entity_id.clone(),
            action: rule.action.to_string(),
            rationale: rule.rationale,
            timing: TimeWindow::new(
                now + Duration::days(rule.start_days),
                now + Duration::days(rule.end_days),
            ),
            confidence: assessment.confidence,
            priority,
        });
    }

    recommendations.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(a.timing.start.cmp(&b.timing.start))
            .then(a.entity_id.cmp(&b.entity_id))
    });

    // Deduplicate by (entity, action); the sort guarantees the kept record
    // is the highest-priority one
    let mut seen = HashSet::new();
    recommendations.retain(|r| seen.insert((r.entity_id.clone(), r.action.clone())));

    if let Some(max) = config.max_recommendations {
        recommendations.truncate(max);
    }
    recommendations
}

/// The contributing signal with the largest magnitude. Contributing signals
/// arrive sorted from the scorer, so equal magnitudes resolve
/// deterministically.
fn dominant_signal(signals: &[Signal]) -> Option<&Signal> {
    signals
        .iter()
        .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
}

fn rule_for(kind: EntityKind, dominant: &Signal) -> Option<Rule> {
    match (kind, dominant.kind) {
        (EntityKind::Crop, SignalKind::ThresholdBreach) => crop_rule(dominant),

        (EntityKind::Commodity, SignalKind::TrendUp) => Some(Rule {
            action: "Hold for stronger prices",
            rationale: format!(
                "Price is trending up ({:.1}% over the window); delaying the sale may capture further gains.",
                dominant.magnitude * 100.0
            ),
            start_days: 3,
            end_days: 21,
        }),
        (EntityKind::Commodity, SignalKind::TrendDown) => Some(Rule {
            action: "Lock in prices with forward contracts",
            rationale: format!(
                "Price is trending down ({:.1}% over the window); forward contracts protect against further decline.",
                dominant.magnitude * 100.0
            ),
            start_days: 0,
            end_days: 2,
        }),
        (EntityKind::Commodity, SignalKind::ThresholdBreach) => Some(Rule {
            action: "Review hedging position",
            rationale: "Period-over-period returns are unusually volatile; re-check hedge coverage before committing to a sale."
                .to_string(),
            start_days: 0,
            end_days: 7,
        }),

        (EntityKind::WeatherStation, SignalKind::ThresholdBreach) => Some(Rule {
            action: "Adjust field operations for precipitation risk",
            rationale:
                "Forecast precipitation is outside the safe operating band; reschedule spraying, drainage, or irrigation accordingly."
                    .to_string(),
            start_days: 0,
            end_days: 3,
        }),
        (EntityKind::WeatherStation, SignalKind::TrendUp) => Some(Rule {
            action: "Monitor for heat stress",
            rationale: "Temperatures are climbing steadily; check vulnerable crops and water availability."
                .to_string(),
            start_days: 0,
            end_days: 5,
        }),
        (EntityKind::WeatherStation, SignalKind::TrendDown) => Some(Rule {
            action: "Prepare cold protection",
            rationale: "Temperatures are falling steadily; protect frost-sensitive plantings."
                .to_string(),
            start_days: 0,
            end_days: 5,
        }),

        // Stable conditions and unmatched combinations produce no action
        _ => None,
    }
}

fn crop_rule(dominant: &Signal) -> Option<Rule> {
    match dominant.metric {
        Metric::Irrigation => Some(Rule {
            action: "Increase irrigation",
            rationale: "Soil moisture is below optimal; schedule additional watering over the next two days."
                .to_string(),
            start_days: 0,
            end_days: 2,
        }),
        Metric::CropHealth => Some(Rule {
            action: "Inspect crop for stress",
            rationale: "Crop health has deviated from optimal; scout the field for pests, disease, or nutrient deficiency."
                .to_string(),
            start_days: 0,
            end_days: 3,
        }),
        Metric::Sunlight => Some(Rule {
            action: "Adjust canopy or shading",
            rationale: "Sunlight exposure is off target; review canopy management or shade placement."
                .to_string(),
            start_days: 1,
            end_days: 7,
        }),
        Metric::DaysTillHarvest => Some(Rule {
            action: "Prepare harvest operations",
            rationale: "Harvest is approaching; line up labor, equipment, and storage now."
                .to_string(),
            start_days: 0,
            end_days: 7,
        }),
        _ => None,
    }
}
