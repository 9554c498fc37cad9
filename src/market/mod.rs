//! Trading data access and the per-symbol change metric.

pub mod change;
pub mod data;

pub use change::{compute_change, SymbolChange};
pub use data::{TickerData, METRIC_ADJ_CLOSE, METRIC_OPEN, METRIC_VOLUME, REQUIRED_METRICS};
