//! City-level market value change mapping.
//!
//! Joins a roster of publicly traded companies, per-symbol daily trading
//! metrics, and municipal boundary polygons into a GeoJSON FeatureCollection
//! of volume-weighted market value change per US city, ready for choropleth
//! rendering.

pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod market;
pub mod models;
pub mod output;
pub mod pipeline;
