//! Output document construction.

pub mod geojson;

pub use geojson::{build_feature_collection, property_table};
