//! Risk and confidence scoring
//!
//! Combines an entity's extracted signals into a risk level and a calibrated
//! confidence. Deterministic and order-independent: the input signal set is
//! sorted internally before reducing, so permuting the input never changes
//! the result.

use shared::{Direction, EntityId, RiskAssessment, RiskLevel, Signal};

/// Score one entity's signals.
///
/// Risk level is the bucket of the maximum contributing magnitude.
/// Confidence is directional agreement scaled by evidence depth: it strictly
/// decreases as the signal set shrinks or disagrees. Zero signals yield
/// confidence 0 and risk Low — absence of evidence is not evidence of
/// safety, but cannot justify alarm.
pub fn score(entity_id: EntityId, mut signals: Vec<Signal>) -> RiskAssessment {
    if signals.is_empty() {
        return RiskAssessment {
            entity_id,
            level: RiskLevel::Low,
            confidence: 0.0,
            contributing_signals: Vec::new(),
        };
    }

    signals.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then(a.metric.cmp(&b.metric))
            .then(a.magnitude.total_cmp(&b.magnitude))
            .then(a.observed_at.cmp(&b.observed_at))
    });

    let max_magnitude = signals
        .iter()
        .map(|s| s.magnitude)
        .fold(0.0_f64, f64::max);
    let level = RiskLevel::from_magnitude(max_magnitude);
    let confidence = confidence_of(&signals);

    RiskAssessment {
        entity_id,
        level,
        confidence,
        contributing_signals: signals,
    }
}

/// Confidence = agreement * depth.
///
/// Agreement is 1 minus the fraction of signals whose directional sign
/// conflicts with the majority direction. Depth ramps from 0.9 for a single
/// signal toward 1.0 as corroborating signals accumulate, so a unanimous
/// pair outranks a unanimous singleton.
fn confidence_of(signals: &[Signal]) -> f64 {
    let n = signals.len();
    let mut counts = [0usize; 3];
    for signal in signals {
        let index = match signal.kind.direction() {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Neutral => 2,
        };
        counts[index] += 1;
    }
    // Majority by count; ties resolve to the first slot for determinism,
    // which is irrelevant to the result since tied counts conflict equally
    let majority = counts.iter().copied().max().unwrap_or(0);
    let disagreement = (n - majority) as f64 / n as f64;
    let agreement = 1.0 - disagreement;
    let depth = 0.9 + 0.1 * (1.0 - 1.0 / n as f64);
    agreement * depth
}
