//! Domain models for the Farm Insight engine

mod crop;
mod entity;
mod recommendation;
mod risk;
mod sample;
mod signal;
mod snapshot;

pub use crop::*;
pub use entity::*;
pub use recommendation::*;
pub use risk::*;
pub use sample::*;
pub use signal::*;
pub use snapshot::*;
