//! Per-symbol volume-weighted change extraction.

use serde::Serialize;

use crate::error::PipelineError;
use crate::market::data::{TickerData, METRIC_ADJ_CLOSE, METRIC_OPEN, METRIC_VOLUME};

/// One symbol's session metrics and the derived change value.
///
/// The change is a raw dollar-volume proxy, deliberately not normalized by
/// market capitalization: positive means value gained weighted by volume.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolChange {
    pub symbol: String,
    pub open: f64,
    pub close: f64,
    pub volume: f64,
    pub change: f64,
}

/// Compute `(adj_close - open) * volume` for one symbol.
///
/// Any of the three metric series being absent is a hard error for this
/// symbol; zero volume is not, it is a valid zero-change result.
pub fn compute_change(symbol: &str, data: &TickerData) -> Result<SymbolChange, PipelineError> {
    let open = require_metric(data, METRIC_OPEN, symbol)?;
    let close = require_metric(data, METRIC_ADJ_CLOSE, symbol)?;
    let volume = require_metric(data, METRIC_VOLUME, symbol)?;

    Ok(SymbolChange {
        symbol: symbol.to_string(),
        open,
        close,
        volume,
        change: (close - open) * volume,
    })
}

fn require_metric(data: &TickerData, metric: &str, symbol: &str) -> Result<f64, PipelineError> {
    if !data.has_series(metric, symbol) {
        return Err(PipelineError::MissingMetric {
            symbol: symbol.to_string(),
            metric: metric.to_string(),
        });
    }
    data.first_value(metric, symbol)
        .ok_or_else(|| PipelineError::EmptySeries {
            symbol: symbol.to_string(),
            metric: metric.to_string(),
        })
}
