use std::io::Write;

use travelmap_core::error::TravelMapError;
use travelmap_core::io::geojson::{load_feature_collection, parse_feature_collection};
use travelmap_core::io::summary::CollectionSummary;
use travelmap_core::model::LatLng;

const SAMPLE: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [-3.5881, 37.1761] },
      "properties": {
        "name": "Alhambra",
        "images": [
          { "imgURL": "https://example.org/alhambra1.jpg", "tombstone": "Court of the Lions", "description": "Painted in 1871." },
          { "imgURL": "https://example.org/alhambra2.jpg", "tombstone": "Hall of the Abencerrajes" }
        ]
      }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [-4.0273, 39.8628] },
      "properties": { "name": "Toledo", "images": [] }
    }
  ]
}"#;

#[test]
fn test_parse_sample_collection() {
    let collection = parse_feature_collection(SAMPLE).unwrap();
    assert_eq!(collection.len(), 2);

    let alhambra = &collection.features[0];
    assert_eq!(alhambra.name, "Alhambra");
    assert_eq!(alhambra.position, LatLng::new(37.1761, -3.5881));
    assert_eq!(alhambra.images.len(), 2);

    let first = alhambra.images.get(0).unwrap();
    assert_eq!(first.image_url, "https://example.org/alhambra1.jpg");
    assert_eq!(first.tombstone, "Court of the Lions");
    assert_eq!(first.description.as_deref(), Some("Painted in 1871."));
    assert_eq!(alhambra.images.get(1).unwrap().description, None);
}

#[test]
fn test_image_order_is_preserved() {
    let collection = parse_feature_collection(SAMPLE).unwrap();
    let urls: Vec<_> = collection.features[0]
        .images
        .iter()
        .map(|r| r.image_url.as_str())
        .collect();
    assert_eq!(
        urls,
        [
            "https://example.org/alhambra1.jpg",
            "https://example.org/alhambra2.jpg"
        ]
    );
}

#[test]
fn test_find_is_case_insensitive() {
    let collection = parse_feature_collection(SAMPLE).unwrap();
    assert!(collection.find("toledo").is_some());
    assert!(collection.find("Madrid").is_none());
}

#[test]
fn test_nearest_feature() {
    let collection = parse_feature_collection(SAMPLE).unwrap();
    let (index, _) = collection.nearest(LatLng::new(39.8, -4.0)).unwrap();
    assert_eq!(collection.features[index].name, "Toledo");
}

#[test]
fn test_non_point_geometry_is_rejected() {
    let json = r#"{"features": [{"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
        "properties": {"name": "Road"}}]}"#;
    let err = parse_feature_collection(json).unwrap_err();
    assert!(matches!(err, TravelMapError::InvalidFeature { index: 0, .. }));
}

#[test]
fn test_missing_geometry_is_rejected() {
    let json = r#"{"features": [{"geometry": null, "properties": {"name": "Ghost"}}]}"#;
    let err = parse_feature_collection(json).unwrap_err();
    assert!(err.to_string().contains("missing geometry"), "got: {err}");
}

#[test]
fn test_out_of_range_coordinates_are_rejected() {
    let json = r#"{"features": [{"geometry": {"type": "Point", "coordinates": [200.0, 10.0]},
        "properties": {"name": "Off"}}]}"#;
    assert!(parse_feature_collection(json).is_err());
}

#[test]
fn test_non_numeric_coordinate_is_rejected() {
    let json = r#"{"features": [{"geometry": {"type": "Point", "coordinates": ["bad", -3.6, 37.1]},
        "properties": {"name": "Granada"}}]}"#;
    let err = parse_feature_collection(json).unwrap_err();
    assert!(matches!(err, TravelMapError::InvalidFeature { index: 0, .. }));
    assert!(err.to_string().contains("numbers"), "got: {err}");
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let err = parse_feature_collection("{ not json").unwrap_err();
    assert!(matches!(err, TravelMapError::Json(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");
    file.flush().expect("flush");

    let collection = load_feature_collection(file.path()).unwrap();
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_feature_collection(std::path::Path::new("/nonexistent/points.json")).unwrap_err();
    assert!(matches!(err, TravelMapError::Io(_)));
}

#[test]
fn test_summary_counts() {
    let collection = parse_feature_collection(SAMPLE).unwrap();
    let summary = CollectionSummary::of(&collection);
    assert_eq!(summary.feature_count, 2);
    assert_eq!(summary.image_count, 2);
    assert_eq!(summary.records_without_description, 1);
    assert_eq!(summary.empty_features, vec!["Toledo".to_string()]);
    assert!(!summary.is_valid());
}
