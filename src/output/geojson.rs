//! GeoJSON FeatureCollection construction from city aggregates.
//!
//! The output is built as typed `geojson` structures and handed to its
//! serializer, never spliced together as text. Property keys serialize in
//! sorted order, so repeated serialization of the same aggregate is
//! byte-identical.

use geojson::{Feature, FeatureCollection};

use crate::models::{CityAggregate, CityRecord};

/// One feature per input aggregate, properties stringified, geometry
/// attached verbatim.
///
/// This does not filter: callers must pass only geometry-bearing aggregates.
pub fn build_feature_collection(aggregates: &[CityAggregate]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: aggregates.iter().map(feature_for).collect(),
        foreign_members: None,
    }
}

fn feature_for(aggregate: &CityAggregate) -> Feature {
    let mut feature = Feature {
        bbox: None,
        geometry: aggregate.geometry.clone(),
        id: None,
        properties: None,
        foreign_members: None,
    };
    feature.set_property("Headquarters Location", aggregate.headquarters.clone());
    feature.set_property("City Name", aggregate.city.clone());
    feature.set_property("State", aggregate.state.clone());
    feature.set_property("Change", aggregate.change.to_string());
    feature.set_property("CIK", aggregate.companies.to_string());
    feature
}

/// The non-geometry projection of the aggregates, deduplicated on all
/// columns with order preserved.
pub fn property_table(aggregates: &[CityAggregate]) -> Vec<CityRecord> {
    let mut table: Vec<CityRecord> = Vec::new();
    for aggregate in aggregates {
        let record = CityRecord {
            headquarters: aggregate.headquarters.clone(),
            city: aggregate.city.clone(),
            state: aggregate.state.clone(),
            change: aggregate.change,
            companies: aggregate.companies,
        };
        if !table.contains(&record) {
            table.push(record);
        }
    }
    table
}
