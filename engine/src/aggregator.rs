//! Aggregation facade
//!
//! Single entry point orchestrating extraction, scoring, and ranking for a
//! farm snapshot. Evaluation is stateless and side-effect-free per call:
//! every derived object (signal, assessment, recommendation) is created
//! fresh and owned by the returned result.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use shared::{
    AggregationResult, Entity, EntityId, EntityKind, Metric, RiskAssessment, Sample, Signal,
    Snapshot,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult, MissingSeries};
use crate::extractors::{
    CropExtractor, MarketExtractor, SeriesSlice, SignalExtractor, WeatherExtractor,
};
use crate::ranker;
use crate::scorer;
use crate::store::TimeSeriesStore;

/// The Agricultural Insight Aggregation Engine.
///
/// Owns the time-series store and the validated configuration. `append` is
/// the ingestion boundary; `evaluate` is the presentation boundary.
#[derive(Debug)]
pub struct InsightEngine {
    store: TimeSeriesStore,
    config: EngineConfig,
}

impl InsightEngine {
    /// Construct an engine, failing fast on invalid configuration
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            store: TimeSeriesStore::new(),
            config,
        })
    }

    /// Engine with the documented default configuration
    pub fn with_defaults() -> Self {
        Self {
            store: TimeSeriesStore::new(),
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ingestion boundary: append one sample. Timestamps must be monotonic
    /// per (entity, metric) key.
    pub fn append(
        &self,
        entity_id: impl Into<EntityId>,
        metric: Metric,
        sample: Sample,
    ) -> EngineResult<()> {
        self.store.append(entity_id.into(), metric, sample)
    }

    /// Evaluate a snapshot at the current time.
    ///
    /// Fails with `IncompleteSnapshot` if any entity references a metric
    /// with no samples over the window; the engine never substitutes
    /// zero-valued series for missing data.
    pub fn evaluate(&self, snapshot: &Snapshot) -> EngineResult<AggregationResult> {
        self.evaluate_at(snapshot, Utc::now())
    }

    /// `evaluate` with an explicit clock, for deterministic callers
    pub fn evaluate_at(
        &self,
        snapshot: &Snapshot,
        now: DateTime<Utc>,
    ) -> EngineResult<AggregationResult> {
        let (result, missing) = self.run(snapshot, now)?;
        if !missing.is_empty() {
            return Err(EngineError::IncompleteSnapshot { missing });
        }
        Ok(result)
    }

    /// Evaluate, skipping series with no recorded samples instead of
    /// failing. Returns the result together with the skipped keys so the
    /// caller can decide how to present the gap.
    pub fn evaluate_partial(
        &self,
        snapshot: &Snapshot,
    ) -> EngineResult<(AggregationResult, Vec<MissingSeries>)> {
        self.evaluate_partial_at(snapshot, Utc::now())
    }

    /// `evaluate_partial` with an explicit clock
    pub fn evaluate_partial_at(
        &self,
        snapshot: &Snapshot,
        now: DateTime<Utc>,
    ) -> EngineResult<(AggregationResult, Vec<MissingSeries>)> {
        let (result, missing) = self.run(snapshot, now)?;
        for m in &missing {
            warn!(series = %m, "no samples over evaluation window; skipped");
        }
        Ok((result, missing))
    }

    fn run(
        &self,
        snapshot: &Snapshot,
        now: DateTime<Utc>,
    ) -> EngineResult<(AggregationResult, Vec<MissingSeries>)> {
        let mut assessments: Vec<(EntityKind, RiskAssessment)> = Vec::new();
        let mut missing = Vec::new();

        for entity in &snapshot.entities {
            let signals = self.extract_entity_signals(entity, snapshot, &mut missing);
            assessments.push((entity.kind, scorer::score(entity.id.clone(), signals)));
        }

        // Ranking is a full barrier: every assessment is in before any
        // recommendation is produced, since priority ordering is global
        let recommendations = ranker::rank(&assessments, &self.config, now);

        info!(
            entities = snapshot.entities.len(),
            assessments = assessments.len(),
            recommendations = recommendations.len(),
            missing = missing.len(),
            "evaluation complete"
        );

        let result = AggregationResult {
            risk_assessments: assessments.into_iter().map(|(_, a)| a).collect(),
            recommendations,
            generated_at: now,
        };
        Ok((result, missing))
    }

    fn extract_entity_signals(
        &self,
        entity: &Entity,
        snapshot: &Snapshot,
        missing: &mut Vec<MissingSeries>,
    ) -> Vec<Signal> {
        let extractor = self.extractor_for(entity.kind);
        let mut signals = Vec::new();

        for &metric in &entity.metrics {
            let samples = self.store.query(&entity.id, metric, &snapshot.window);
            if samples.is_empty() {
                missing.push(MissingSeries {
                    entity_id: entity.id.clone(),
                    metric,
                });
                continue;
            }
            let slice = SeriesSlice {
                entity_id: &entity.id,
                metric,
                samples: &samples,
            };
            signals.extend(extractor.extract(&slice));
        }
        signals
    }

    fn extractor_for(&self, kind: EntityKind) -> Box<dyn SignalExtractor + '_> {
        match kind {
            EntityKind::Crop => Box::new(CropExtractor::new()),
            EntityKind::Commodity => Box::new(MarketExtractor::new(&self.config)),
            EntityKind::WeatherStation => Box::new(WeatherExtractor::new(&self.config)),
        }
    }
}
