//! Trading dataset keyed by (metric, symbol) pairs.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const METRIC_OPEN: &str = "Open";
pub const METRIC_ADJ_CLOSE: &str = "Adj Close";
pub const METRIC_VOLUME: &str = "Volume";

/// The metric series the change computation requires for every symbol.
pub const REQUIRED_METRICS: [&str; 3] = [METRIC_OPEN, METRIC_ADJ_CLOSE, METRIC_VOLUME];

/// Multi-keyed trading dataset: one time-indexed series per (metric, symbol).
///
/// A single trading session is assumed; multi-session series are read at
/// their first (earliest) value only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TickerData {
    series: HashMap<String, HashMap<String, BTreeMap<DateTime<Utc>, f64>>>,
}

impl TickerData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the series for one (metric, symbol) pair.
    pub fn insert(
        &mut self,
        metric: &str,
        symbol: &str,
        points: BTreeMap<DateTime<Utc>, f64>,
    ) {
        self.series
            .entry(metric.to_string())
            .or_default()
            .insert(symbol.to_string(), points);
    }

    pub fn has_series(&self, metric: &str, symbol: &str) -> bool {
        self.series
            .get(metric)
            .map(|by_symbol| by_symbol.contains_key(symbol))
            .unwrap_or(false)
    }

    /// Whether the dataset carries any of the required metric series for
    /// `symbol`. Symbols failing this are outside the dataset's coverage,
    /// which is a different condition than a partially missing metric.
    pub fn covers_symbol(&self, symbol: &str) -> bool {
        REQUIRED_METRICS
            .iter()
            .any(|metric| self.has_series(metric, symbol))
    }

    /// Earliest session value of the (metric, symbol) series, if any.
    pub fn first_value(&self, metric: &str, symbol: &str) -> Option<f64> {
        self.series
            .get(metric)?
            .get(symbol)?
            .values()
            .next()
            .copied()
    }
}
