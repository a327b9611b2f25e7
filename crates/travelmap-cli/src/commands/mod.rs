pub mod config;
pub mod info;
pub mod replay;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use travelmap_core::config::MapConfig;
use travelmap_core::io::geojson::load_feature_collection;
use travelmap_core::model::FeatureCollection;

/// Read a TOML map config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<MapConfig> {
    let Some(path) = path else {
        return Ok(MapConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid map config")
}

/// Load the data file given on the command line, falling back to the config.
pub fn load_features(
    file: Option<&PathBuf>,
    config: &MapConfig,
) -> Result<(PathBuf, FeatureCollection)> {
    let path = file.cloned().unwrap_or_else(|| config.data.path.clone());
    let collection = load_feature_collection(&path)
        .with_context(|| format!("Failed to load features from {}", path.display()))?;
    Ok((path, collection))
}
