use serde::{Deserialize, Serialize};

/// One image shown in a popup gallery.
///
/// Field names on the wire follow the data file (`imgURL`, `tombstone`,
/// `description`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(rename = "imgURL")]
    pub image_url: String,
    /// Caption/attribution shown under the selected image.
    #[serde(default)]
    pub tombstone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ImageRecord {
    pub fn new(image_url: impl Into<String>, tombstone: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            tombstone: tombstone.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description text to render. Missing descriptions render as "".
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Ordered images of the popup that is currently open.
///
/// Order is the gallery display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GallerySlideSet(Vec<ImageRecord>);

impl GallerySlideSet {
    pub fn new(slides: Vec<ImageRecord>) -> Self {
        Self(slides)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ImageRecord] {
        &self.0
    }
}

impl From<Vec<ImageRecord>> for GallerySlideSet {
    fn from(slides: Vec<ImageRecord>) -> Self {
        Self(slides)
    }
}

impl FromIterator<ImageRecord> for GallerySlideSet {
    fn from_iter<I: IntoIterator<Item = ImageRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GallerySlideSet {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Geographic position in degrees. Serialized as `[lat, lng]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// A geotagged point of the map together with its gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub name: String,
    pub position: LatLng,
    pub images: GallerySlideSet,
}

/// All points loaded from the data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Find a feature by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Feature closest to `position`, using a flat lat/lng distance.
    pub fn nearest(&self, position: LatLng) -> Option<(usize, f64)> {
        self.features
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let dlat = f.position.lat - position.lat;
                let dlng = f.position.lng - position.lng;
                (i, (dlat * dlat + dlng * dlng).sqrt())
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}
