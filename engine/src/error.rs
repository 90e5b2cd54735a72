//! Error handling for the Farm Insight engine
//!
//! Every failure is a value returned to the immediate caller; nothing in
//! this crate terminates the process.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use shared::{EntityId, Metric};

/// A referenced series the store had no usable samples for
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingSeries {
    pub entity_id: EntityId,
    pub metric: Metric,
}

impl std::fmt::Display for MissingSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.entity_id, self.metric)
    }
}

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rejected at ingestion; the store is left untouched
    #[error(
        "Out-of-order sample for {entity_id}/{metric}: {attempted} is not after {last_recorded}"
    )]
    OutOfOrderSample {
        entity_id: EntityId,
        metric: Metric,
        attempted: DateTime<Utc>,
        last_recorded: DateTime<Utc>,
    },

    /// A snapshot referenced series the store has no samples for over the
    /// requested window. Recoverable: callers wanting partial results use
    /// `evaluate_partial` instead.
    #[error("Incomplete snapshot: no recorded samples for {}", format_missing(.missing))]
    IncompleteSnapshot { missing: Vec<MissingSeries> },

    /// Rejected at engine construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

fn format_missing(missing: &[MissingSeries]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
