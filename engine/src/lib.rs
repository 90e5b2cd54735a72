//! Agricultural Insight Aggregation Engine
//!
//! Ingests heterogeneous time-series signals (weather forecast, crop
//! telemetry, commodity price series) and produces ranked, explainable
//! recommendations with calibrated confidence. Pure and in-process: no
//! server, no persistence, no blocking I/O.
//!
//! Data flows one way: raw series → extractors → scorer → ranker → facade
//! output. Each stage is a pure function of its inputs plus explicit
//! configuration.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod extractors;
pub mod ranker;
pub mod scorer;
pub mod store;

pub use aggregator::InsightEngine;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult, MissingSeries};
pub use store::TimeSeriesStore;
