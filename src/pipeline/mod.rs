//! Address parsing and the join-and-aggregation orchestrator.

pub mod address;
pub mod engine;

pub use address::parse_headquarters;
pub use engine::{JoinEngine, PipelineOutput};
