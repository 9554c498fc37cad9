use geojson::Geometry;
use serde::Serialize;

/// Composite grouping key for the city-level rollup. Grouping by address
/// rather than symbol collapses multiple share classes of one company at the
/// same headquarters into a single city contribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityKey {
    pub headquarters: String,
    pub city: String,
    pub state: String,
}

/// One city-level row of the aggregated output. `geometry` is `None` when no
/// boundary feature matched; such rows are retained in the aggregate but
/// excluded from the geometry document.
#[derive(Debug, Clone)]
pub struct CityAggregate {
    pub headquarters: String,
    pub city: String,
    pub state: String,
    /// Sum of per-symbol volume-weighted changes for this city.
    pub change: f64,
    /// Count of distinct companies (by CIK) contributing to this city.
    pub companies: u64,
    pub geometry: Option<Geometry>,
}

/// Non-geometry projection of a city aggregate, for consumers that do not
/// need polygons. Serialized column names match the source roster convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRecord {
    #[serde(rename = "Headquarters Location")]
    pub headquarters: String,
    #[serde(rename = "City Name")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Change")]
    pub change: f64,
    #[serde(rename = "CIK")]
    pub companies: u64,
}

/// Join-stage resolution counts, reported after every run so callers can
/// monitor coverage degradation as the alias table drifts out of date.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Coverage {
    /// Deduplicated roster rows entering the aggregation.
    pub total: usize,
    /// Rows whose state resolved to a fips code.
    pub with_state: usize,
    /// Rows whose city matched a boundary feature. Never exceeds `with_state`.
    pub with_geometry: usize,
}

impl Coverage {
    /// Rows that resolved a state but found no city boundary.
    pub fn unmatched_cities(&self) -> usize {
        self.with_state - self.with_geometry
    }
}
