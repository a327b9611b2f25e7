pub mod geojson;
pub mod summary;
