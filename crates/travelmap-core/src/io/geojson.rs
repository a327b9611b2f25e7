use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TravelMapError};
use crate::model::{Feature, FeatureCollection, GallerySlideSet, ImageRecord, LatLng};

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    properties: RawProperties,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

#[derive(Deserialize)]
struct RawProperties {
    name: String,
    #[serde(default)]
    images: Vec<ImageRecord>,
}

/// Read a GeoJSON feature collection from disk.
pub fn load_feature_collection(path: &Path) -> Result<FeatureCollection> {
    let contents = std::fs::read_to_string(path)?;
    let collection = parse_feature_collection(&contents)?;
    tracing::info!(
        "Loaded {} features from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

/// Parse a GeoJSON feature collection.
///
/// Every feature must carry a `Point` geometry; coordinates are `[lng, lat]`
/// as GeoJSON orders them.
pub fn parse_feature_collection(json: &str) -> Result<FeatureCollection> {
    let raw: RawCollection = serde_json::from_str(json)?;
    let features = raw
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| convert_feature(index, feature))
        .collect::<Result<Vec<_>>>()?;
    Ok(FeatureCollection { features })
}

fn convert_feature(index: usize, raw: RawFeature) -> Result<Feature> {
    let invalid = |reason: &str| TravelMapError::InvalidFeature {
        index,
        reason: reason.to_string(),
    };

    let geometry = raw.geometry.ok_or_else(|| invalid("missing geometry"))?;
    if geometry.kind != "Point" {
        return Err(invalid(&format!(
            "expected Point geometry, got {}",
            geometry.kind
        )));
    }
    let values = geometry
        .coordinates
        .as_array()
        .ok_or_else(|| invalid("coordinates must be an array"))?;
    let coordinates = values
        .iter()
        .map(serde_json::Value::as_f64)
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| invalid("coordinates must be numbers"))?;
    let (lng, lat) = match coordinates.as_slice() {
        [lng, lat, ..] => (*lng, *lat),
        _ => return Err(invalid("point needs two coordinates")),
    };
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid("coordinates out of range"));
    }

    Ok(Feature {
        name: raw.properties.name,
        position: LatLng::new(lat, lng),
        images: GallerySlideSet::new(raw.properties.images),
    })
}
