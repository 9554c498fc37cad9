//! Environment-based runtime configuration.

use std::env;

/// Input and output paths for the driver binary. The pipeline core never
/// touches the filesystem itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub roster_path: String,
    pub boundaries_path: String,
    pub ticker_path: String,
    pub output_geojson_path: String,
    pub output_table_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: env_or("MARKETMAP_ROSTER", "data/roster.json"),
            boundaries_path: env_or("MARKETMAP_BOUNDARIES", "data/boundaries.json"),
            ticker_path: env_or("MARKETMAP_TICKER_DATA", "data/ticker_data.json"),
            output_geojson_path: env_or("MARKETMAP_OUTPUT_GEOJSON", "out/market_change.geojson"),
            output_table_path: env_or("MARKETMAP_OUTPUT_TABLE", "out/market_change.json"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Deployment environment name, used to pick the log formatter.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
