//! Shared domain types for the Farm Insight engine
//!
//! This crate contains the data model shared between the aggregation engine,
//! ingestion pipelines, and presentation-layer consumers of its output.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
