//! Typed error definitions for the market-map pipeline.
//!
//! Per-row resolution failures (address, state, city) are never errors: they
//! propagate as `None` fields and the run continues. [`PipelineError`] covers
//! the hard failures: trading-data contract violations and malformed upstream
//! structure.

use thiserror::Error;

/// Domain errors surfaced by the join-and-aggregation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required trading metric series is absent for a symbol. Distinct from
    /// zero volume, which is a valid zero-change result.
    #[error("missing {metric} series for symbol {symbol}")]
    MissingMetric { symbol: String, metric: String },

    /// A trading metric series exists for a symbol but holds no session values.
    #[error("empty {metric} series for symbol {symbol}")]
    EmptySeries { symbol: String, metric: String },

    /// The boundary document deviates from the expected structure.
    #[error("malformed boundary document: {0}")]
    MalformedBoundary(String),

    /// An input document failed to deserialize.
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}
