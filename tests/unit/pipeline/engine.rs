use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use marketmap::error::PipelineError;
use marketmap::geo::index::GeometryIndex;
use marketmap::market::data::{TickerData, METRIC_ADJ_CLOSE, METRIC_OPEN, METRIC_VOLUME};
use marketmap::models::Company;
use marketmap::pipeline::engine::JoinEngine;
use serde_json::json;

fn company(symbol: &str, security: &str, headquarters: &str, cik: &str) -> Company {
    Company {
        symbol: symbol.to_string(),
        security: security.to_string(),
        headquarters: headquarters.to_string(),
        cik: cik.to_string(),
        gics_sector: Some("Information Technology".to_string()),
        gics_sub_industry: None,
    }
}

fn session(value: f64) -> BTreeMap<DateTime<Utc>, f64> {
    let mut points = BTreeMap::new();
    points.insert("2024-08-15T00:00:00Z".parse().unwrap(), value);
    points
}

fn add_symbol(data: &mut TickerData, symbol: &str, open: f64, close: f64, volume: f64) {
    data.insert(METRIC_OPEN, symbol, session(open));
    data.insert(METRIC_ADJ_CLOSE, symbol, session(close));
    data.insert(METRIC_VOLUME, symbol, session(volume));
}

fn california_index() -> GeometryIndex {
    GeometryIndex::from_json(json!({
        "06": {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"NAME": "Cupertino"},
                    "geometry": {"type": "Polygon", "coordinates": [[[-122.0, 37.0], [-121.9, 37.0], [-121.9, 37.1], [-122.0, 37.1], [-122.0, 37.0]]]}
                },
                {
                    "type": "Feature",
                    "properties": {"NAME": "Sunnyvale"},
                    "geometry": {"type": "Polygon", "coordinates": [[[-122.1, 37.3], [-122.0, 37.3], [-122.0, 37.4], [-122.1, 37.4], [-122.1, 37.3]]]}
                }
            ]
        }
    }))
    .unwrap()
}

#[test]
fn test_run_produces_one_aggregate_per_city() {
    let companies = vec![
        company("AAPL", "Apple Inc.", "Cupertino, California", "0000320193"),
        company("SONY", "Sony Group", "Sunnyvale, California", "0000313838"),
    ];
    let mut ticker = TickerData::new();
    add_symbol(&mut ticker, "AAPL", 150.0, 155.0, 1_000.0);
    add_symbol(&mut ticker, "SONY", 90.0, 89.0, 2_000.0);

    let output = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap();

    assert_eq!(output.aggregates.len(), 2);
    assert_eq!(output.collection.features.len(), 2);
    assert_eq!(output.table.len(), 2);
    assert_eq!(output.coverage.total, 2);
    assert_eq!(output.coverage.with_state, 2);
    assert_eq!(output.coverage.with_geometry, 2);
}

#[test]
fn test_unresolvable_state_keeps_row_without_geometry() {
    let companies = vec![company("LOST", "Lost Corp", "Nowhere, Atlantis", "0000000001")];
    let mut ticker = TickerData::new();
    add_symbol(&mut ticker, "LOST", 10.0, 11.0, 100.0);

    let output = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap();

    assert_eq!(output.aggregates.len(), 1);
    assert!(output.aggregates[0].geometry.is_none());
    assert!(output.collection.features.is_empty());
    assert!(output.table.is_empty());
    assert_eq!(output.coverage.total, 1);
    assert_eq!(output.coverage.with_state, 0);
}

#[test]
fn test_unresolvable_city_keeps_row_without_geometry() {
    let companies = vec![company("FRSN", "Fresno Co", "Fresno, California", "0000000002")];
    let mut ticker = TickerData::new();
    add_symbol(&mut ticker, "FRSN", 10.0, 11.0, 100.0);

    let output = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap();

    assert_eq!(output.aggregates.len(), 1);
    assert!(output.aggregates[0].geometry.is_none());
    assert_eq!(output.coverage.with_state, 1);
    assert_eq!(output.coverage.with_geometry, 0);
    assert_eq!(output.coverage.unmatched_cities(), 1);
}

#[test]
fn test_symbol_outside_dataset_has_undefined_change() {
    let companies = vec![
        company("AAPL", "Apple Inc.", "Cupertino, California", "0000320193"),
        company("GHOST", "Ghost Corp", "Sunnyvale, California", "0000000003"),
    ];
    let mut ticker = TickerData::new();
    add_symbol(&mut ticker, "AAPL", 150.0, 155.0, 1_000.0);

    let output = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap();

    // The uncovered symbol is retained; its change contributes nothing.
    let ghost = output
        .aggregates
        .iter()
        .find(|aggregate| aggregate.city == "Sunnyvale")
        .unwrap();
    assert_eq!(ghost.change, 0.0);
    assert_eq!(ghost.companies, 1);
}

#[test]
fn test_partially_missing_metrics_fail_the_run() {
    let companies = vec![company("AAPL", "Apple Inc.", "Cupertino, California", "0000320193")];
    let mut ticker = TickerData::new();
    ticker.insert(METRIC_OPEN, "AAPL", session(150.0));
    ticker.insert(METRIC_ADJ_CLOSE, "AAPL", session(155.0));

    let err = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap_err();
    assert!(matches!(err, PipelineError::MissingMetric { .. }));
}

#[test]
fn test_exact_repeated_rows_deduplicate() {
    let row = company("AAPL", "Apple Inc.", "Cupertino, California", "0000320193");
    let companies = vec![row.clone(), row];
    let mut ticker = TickerData::new();
    add_symbol(&mut ticker, "AAPL", 150.0, 155.0, 1_000.0);

    let output = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap();

    assert_eq!(output.coverage.total, 1);
    assert_eq!(output.aggregates.len(), 1);
    assert_eq!(output.aggregates[0].change, 5_000.0);
}

#[test]
fn test_coverage_invariant_state_count_bounds_geometry_count() {
    let companies = vec![
        company("AAPL", "Apple Inc.", "Cupertino, California", "0000320193"),
        company("FRSN", "Fresno Co", "Fresno, California", "0000000002"),
        company("LOST", "Lost Corp", "Nowhere, Atlantis", "0000000001"),
    ];
    let mut ticker = TickerData::new();
    add_symbol(&mut ticker, "AAPL", 150.0, 155.0, 1_000.0);
    add_symbol(&mut ticker, "FRSN", 10.0, 11.0, 100.0);
    add_symbol(&mut ticker, "LOST", 10.0, 11.0, 100.0);

    let output = JoinEngine::new(california_index())
        .run(&companies, &ticker)
        .unwrap();

    assert!(output.coverage.with_state >= output.coverage.with_geometry);
    assert!(output.coverage.total >= output.coverage.with_state);
}
