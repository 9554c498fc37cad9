//! The join-and-aggregation orchestrator.
//!
//! Owns all intermediate tables for the duration of one run: roster rows are
//! keyed by parsed address and state registry lookups, enriched with boundary
//! geometry and per-symbol change values through left joins, deduplicated,
//! and rolled up to one row per city.

use std::collections::{HashMap, HashSet};

use geojson::{FeatureCollection, Geometry};
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::geo::index::GeometryIndex;
use crate::geo::{aliases, states};
use crate::market::change;
use crate::market::data::TickerData;
use crate::models::{CityAggregate, CityKey, CityRecord, Company, Coverage, LocatedCompany};
use crate::output::geojson::{build_feature_collection, property_table};
use crate::pipeline::address;

/// Everything one pipeline run produces.
#[derive(Debug)]
pub struct PipelineOutput {
    /// Geometry document: one feature per geometry-bearing city aggregate.
    pub collection: FeatureCollection,
    /// Deduplicated non-geometry projection, aligned with the features.
    pub table: Vec<CityRecord>,
    /// Every city aggregate, including rows that matched no boundary.
    pub aggregates: Vec<CityAggregate>,
    pub coverage: Coverage,
}

/// Drives the relational pipeline over one roster + trading dataset. Owns the
/// geometry index exclusively for its lifetime; nothing is cached across runs.
pub struct JoinEngine {
    index: GeometryIndex,
}

impl JoinEngine {
    pub fn new(index: GeometryIndex) -> Self {
        Self { index }
    }

    pub fn run(
        &self,
        companies: &[Company],
        ticker: &TickerData,
    ) -> Result<PipelineOutput, PipelineError> {
        let located = locate_companies(companies);
        let geometry_by_key = self.collect_geometry(&located)?;
        let change_by_symbol = collect_changes(&located, ticker)?;

        // Guard against fan-out from ambiguous joins: drop exact repeats
        // keyed by (symbol, security, city, state), keeping the first.
        let mut seen: HashSet<(&str, &str, &str, &str)> = HashSet::new();
        let mut rows: Vec<&LocatedCompany> = Vec::new();
        for row in &located {
            let key = (
                row.company.symbol.as_str(),
                row.company.security.as_str(),
                row.city.as_str(),
                row.state.as_str(),
            );
            if seen.insert(key) {
                rows.push(row);
            }
        }

        let coverage = measure_coverage(&rows, &geometry_by_key);
        info!(
            total = coverage.total,
            with_state = coverage.with_state,
            with_geometry = coverage.with_geometry,
            "{} companies with a resolved state failed to match a city boundary",
            coverage.unmatched_cities()
        );

        let aggregates = aggregate_by_city(&rows, &change_by_symbol, &geometry_by_key);

        let with_geometry: Vec<CityAggregate> = aggregates
            .iter()
            .filter(|aggregate| aggregate.geometry.is_some())
            .cloned()
            .collect();
        let collection = build_feature_collection(&with_geometry);
        let table = property_table(&with_geometry);

        Ok(PipelineOutput {
            collection,
            table,
            aggregates,
            coverage,
        })
    }

    /// One index query per distinct fips code present in the roster. The
    /// first boundary seen for a (fips, city) pair wins; later duplicates are
    /// ignored, matching the index's own tie-break.
    fn collect_geometry(
        &self,
        located: &[LocatedCompany],
    ) -> Result<HashMap<(String, String), Geometry>, PipelineError> {
        let mut candidates_by_fips: HashMap<&'static str, HashSet<&str>> = HashMap::new();
        for row in located {
            if let Some(fips) = row.fips {
                candidates_by_fips
                    .entry(fips)
                    .or_default()
                    .insert(row.city.as_str());
            }
        }

        let mut geometry_by_key: HashMap<(String, String), Geometry> = HashMap::new();
        for (fips, cities) in &candidates_by_fips {
            let boundaries = self.index.lookup(fips, cities)?;
            debug!(fips = *fips, matches = boundaries.len(), "queried boundary index");
            for boundary in boundaries {
                geometry_by_key
                    .entry((boundary.fips, boundary.city))
                    .or_insert(boundary.geometry);
            }
        }
        Ok(geometry_by_key)
    }
}

/// Parse every headquarters string, resolve the state fips code, and rewrite
/// the city through the alias table. Left-join semantics throughout: rows
/// that fail to resolve keep `None` and are retained.
fn locate_companies(companies: &[Company]) -> Vec<LocatedCompany> {
    companies
        .iter()
        .map(|company| {
            let parsed = address::parse_headquarters(&company.headquarters);
            let fips = states::fips_for_name(&parsed.state);
            let city = aliases::resolve_city(&parsed.city).to_string();
            LocatedCompany {
                company: company.clone(),
                city,
                state: parsed.state,
                fips,
            }
        })
        .collect()
}

/// Per-symbol change values, left-joinable by symbol.
///
/// A symbol entirely absent from the trading dataset has an undefined change
/// (`None`), an expected coverage gap. A symbol with some but not all of the
/// required metrics is a data-source contract violation and fails the run.
fn collect_changes<'a>(
    located: &'a [LocatedCompany],
    ticker: &TickerData,
) -> Result<HashMap<&'a str, Option<f64>>, PipelineError> {
    let mut change_by_symbol: HashMap<&str, Option<f64>> = HashMap::new();
    for row in located {
        let symbol = row.company.symbol.as_str();
        if change_by_symbol.contains_key(symbol) {
            continue;
        }
        let value = if ticker.covers_symbol(symbol) {
            Some(change::compute_change(symbol, ticker)?.change)
        } else {
            None
        };
        change_by_symbol.insert(symbol, value);
    }
    Ok(change_by_symbol)
}

/// Group deduplicated rows by (headquarters, city, state), summing changes
/// and counting distinct companies by CIK, then re-attach one geometry per
/// group on the same key. Group order follows first appearance in the roster
/// so output is deterministic.
fn aggregate_by_city(
    rows: &[&LocatedCompany],
    change_by_symbol: &HashMap<&str, Option<f64>>,
    geometry_by_key: &HashMap<(String, String), Geometry>,
) -> Vec<CityAggregate> {
    let mut groups: Vec<(CityKey, f64, HashSet<&str>)> = Vec::new();
    let mut position: HashMap<CityKey, usize> = HashMap::new();

    for row in rows {
        let key = CityKey {
            headquarters: row.company.headquarters.clone(),
            city: row.city.clone(),
            state: row.state.clone(),
        };
        let index = match position.get(&key) {
            Some(&index) => index,
            None => {
                let index = groups.len();
                position.insert(key.clone(), index);
                groups.push((key, 0.0, HashSet::new()));
                index
            }
        };
        let group = &mut groups[index];
        if let Some(Some(value)) = change_by_symbol.get(row.company.symbol.as_str()) {
            group.1 += *value;
        }
        group.2.insert(row.company.cik.as_str());
    }

    groups
        .into_iter()
        .map(|(key, change, ciks)| {
            let geometry = states::fips_for_name(&key.state)
                .and_then(|fips| geometry_by_key.get(&(fips.to_string(), key.city.clone())))
                .cloned();
            CityAggregate {
                headquarters: key.headquarters,
                city: key.city,
                state: key.state,
                change,
                companies: ciks.len() as u64,
                geometry,
            }
        })
        .collect()
}

fn measure_coverage(
    rows: &[&LocatedCompany],
    geometry_by_key: &HashMap<(String, String), Geometry>,
) -> Coverage {
    let mut coverage = Coverage {
        total: rows.len(),
        ..Coverage::default()
    };
    for row in rows {
        if let Some(fips) = row.fips {
            coverage.with_state += 1;
            if geometry_by_key.contains_key(&(fips.to_string(), row.city.clone())) {
                coverage.with_geometry += 1;
            }
        }
    }
    coverage
}
