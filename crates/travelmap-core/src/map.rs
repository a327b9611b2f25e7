use crate::config::ViewConfig;
use crate::model::{Feature, GallerySlideSet, LatLng};

/// The mapping library, seen from the popup.
///
/// Tile rendering, clustering and camera animation all live behind this
/// trait; the popup only reads the zoom level and asks for two camera moves.
pub trait MapCollaborator {
    fn zoom(&self) -> f64;

    /// Centre the map on `target` at `zoom`.
    fn fly_to(&mut self, target: LatLng, zoom: f64);

    /// Back to the initial centre and zoom.
    fn recenter_to_default(&mut self);
}

/// Emitted by the map when a point is clicked.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureClicked {
    pub title: String,
    pub images: GallerySlideSet,
    pub zoom: f64,
    pub coordinates: LatLng,
}

impl FeatureClicked {
    pub fn from_feature(feature: &Feature, zoom: f64) -> Self {
        Self {
            title: feature.name.clone(),
            images: feature.images.clone(),
            zoom,
            coordinates: feature.position,
        }
    }
}

/// Minimal camera: a centre and a zoom level kept inside the configured limits.
#[derive(Clone, Debug, PartialEq)]
pub struct MapCamera {
    pub center: LatLng,
    pub zoom: f64,
    view: ViewConfig,
}

impl MapCamera {
    pub fn new(view: ViewConfig) -> Self {
        Self {
            center: view.center,
            zoom: view.initial_zoom,
            view,
        }
    }
}

impl MapCollaborator for MapCamera {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn fly_to(&mut self, target: LatLng, zoom: f64) {
        self.center = self.view.clamp_position(target);
        self.zoom = self.view.clamp_zoom(zoom);
        tracing::debug!("Flying to {} at zoom {}", self.center, self.zoom);
    }

    fn recenter_to_default(&mut self) {
        self.center = self.view.center;
        self.zoom = self.view.initial_zoom;
    }
}
