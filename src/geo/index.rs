//! City-name to polygon lookup over per-state boundary collections.

use std::collections::{HashMap, HashSet};

use geojson::{FeatureCollection, Geometry};

use crate::error::PipelineError;

/// A boundary feature matched for one (state, city) pair, re-tagged with its
/// originating fips code.
#[derive(Debug, Clone)]
pub struct CityBoundary {
    pub fips: String,
    pub city: String,
    pub geometry: Geometry,
}

/// Municipal boundary collections keyed by two-digit state fips code.
///
/// Built once per pipeline run and queried once per fips code present in the
/// roster, never once per company.
#[derive(Debug)]
pub struct GeometryIndex {
    states: HashMap<String, FeatureCollection>,
}

impl GeometryIndex {
    pub fn new(states: HashMap<String, FeatureCollection>) -> Self {
        Self { states }
    }

    /// Parse the raw boundary document (fips code -> feature collection).
    /// Anything that does not match the expected shape is a hard failure.
    pub fn from_json(value: serde_json::Value) -> Result<Self, PipelineError> {
        let states: HashMap<String, FeatureCollection> = serde_json::from_value(value)
            .map_err(|err| PipelineError::MalformedBoundary(err.to_string()))?;
        Ok(Self::new(states))
    }

    /// Number of state collections held.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All features under `fips` whose `NAME` property is one of `candidates`.
    ///
    /// Unknown fips codes and unmatched candidates yield an empty result.
    /// When multiple features in one state share a name, the first one
    /// encountered wins. A name-matched feature without geometry violates the
    /// boundary document contract and fails the run.
    pub fn lookup(
        &self,
        fips: &str,
        candidates: &HashSet<&str>,
    ) -> Result<Vec<CityBoundary>, PipelineError> {
        let collection = match self.states.get(fips) {
            Some(collection) => collection,
            None => return Ok(Vec::new()),
        };

        let mut matched: HashSet<&str> = HashSet::new();
        let mut boundaries = Vec::new();
        for feature in &collection.features {
            let name = match feature.property("NAME").and_then(|value| value.as_str()) {
                Some(name) => name,
                None => continue,
            };
            if !candidates.contains(name) || !matched.insert(name) {
                continue;
            }
            let geometry = feature.geometry.clone().ok_or_else(|| {
                PipelineError::MalformedBoundary(format!(
                    "feature {name} in state {fips} has no geometry"
                ))
            })?;
            boundaries.push(CityBoundary {
                fips: fips.to_string(),
                city: name.to_string(),
                geometry,
            });
        }
        Ok(boundaries)
    }
}
