use std::fs;
use std::path::Path;

use tracing::info;

use marketmap::config::Config;
use marketmap::geo::index::GeometryIndex;
use marketmap::logging::init_logging;
use marketmap::market::data::TickerData;
use marketmap::models::Company;
use marketmap::pipeline::engine::JoinEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logging();
    let config = Config::default();

    let companies: Vec<Company> = serde_json::from_str(&fs::read_to_string(&config.roster_path)?)?;
    info!(count = companies.len(), "loaded company roster");

    let boundaries: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.boundaries_path)?)?;
    let index = GeometryIndex::from_json(boundaries)?;
    info!(states = index.len(), "loaded boundary collections");

    let ticker: TickerData = serde_json::from_str(&fs::read_to_string(&config.ticker_path)?)?;
    info!("loaded trading data");

    let engine = JoinEngine::new(index);
    let output = engine.run(&companies, &ticker)?;
    info!(
        cities = output.aggregates.len(),
        features = output.table.len(),
        "pipeline run complete"
    );

    if let Some(parent) = Path::new(&config.output_geojson_path).parent() {
        fs::create_dir_all(parent)?;
    }
    if let Some(parent) = Path::new(&config.output_table_path).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(
        &config.output_geojson_path,
        geojson::GeoJson::from(output.collection).to_string(),
    )?;
    fs::write(
        &config.output_table_path,
        serde_json::to_string_pretty(&output.table)?,
    )?;
    info!(
        geojson = %config.output_geojson_path,
        table = %config.output_table_path,
        "wrote geometry document and property table"
    );

    Ok(())
}
