use geojson::GeoJson;
use marketmap::models::CityAggregate;
use marketmap::output::geojson::{build_feature_collection, property_table};
use serde_json::json;

fn polygon() -> geojson::Geometry {
    serde_json::from_value(json!({
        "type": "Polygon",
        "coordinates": [[[-122.0, 37.0], [-121.9, 37.0], [-121.9, 37.1], [-122.0, 37.1], [-122.0, 37.0]]]
    }))
    .unwrap()
}

fn aggregate(city: &str, change: f64) -> CityAggregate {
    CityAggregate {
        headquarters: format!("{city}, California"),
        city: city.to_string(),
        state: "California".to_string(),
        change,
        companies: 1,
        geometry: Some(polygon()),
    }
}

#[test]
fn test_one_feature_per_aggregate() {
    let aggregates = vec![aggregate("Cupertino", 5_000_000.0), aggregate("Sunnyvale", -250.0)];
    let collection = build_feature_collection(&aggregates);
    assert_eq!(collection.features.len(), 2);
}

#[test]
fn test_properties_are_stringified_columns() {
    let collection = build_feature_collection(&[aggregate("Cupertino", 5_000_000.0)]);
    let feature = &collection.features[0];
    let text = |key: &str| feature.property(key).and_then(|value| value.as_str());
    assert_eq!(text("Headquarters Location"), Some("Cupertino, California"));
    assert_eq!(text("City Name"), Some("Cupertino"));
    assert_eq!(text("State"), Some("California"));
    assert_eq!(text("Change"), Some("5000000"));
    assert_eq!(text("CIK"), Some("1"));
}

#[test]
fn test_geometry_attached_verbatim() {
    let collection = build_feature_collection(&[aggregate("Cupertino", 1.0)]);
    assert_eq!(collection.features[0].geometry.as_ref().unwrap(), &polygon());
}

#[test]
fn test_output_parses_as_geojson() {
    let collection = build_feature_collection(&[aggregate("Cupertino", 1.0)]);
    let serialized = GeoJson::from(collection).to_string();
    let parsed: GeoJson = serialized.parse().unwrap();
    match parsed {
        GeoJson::FeatureCollection(fc) => assert_eq!(fc.features.len(), 1),
        other => panic!("expected a FeatureCollection, got {other:?}"),
    }
}

#[test]
fn test_serialization_is_idempotent() {
    let aggregates = vec![aggregate("Cupertino", 5_000_000.0), aggregate("Sunnyvale", -250.0)];
    let first = GeoJson::from(build_feature_collection(&aggregates)).to_string();
    let second = GeoJson::from(build_feature_collection(&aggregates)).to_string();
    assert_eq!(first, second);
}

#[test]
fn test_property_table_deduplicates_on_all_columns() {
    let aggregates = vec![
        aggregate("Cupertino", 1.0),
        aggregate("Cupertino", 1.0),
        aggregate("Cupertino", 2.0),
    ];
    let table = property_table(&aggregates);
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].change, 1.0);
    assert_eq!(table[1].change, 2.0);
}
