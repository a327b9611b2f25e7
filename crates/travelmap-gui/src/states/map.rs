use egui_plot::PlotBounds;
use travelmap_core::config::ViewConfig;
use travelmap_core::map::{MapCamera, MapCollaborator};
use travelmap_core::model::LatLng;

/// Width in pixels of one map tile; at zoom 0 one tile spans 360 degrees.
const TILE_SIZE: f64 = 256.0;

/// Camera of the map panel. Camera moves requested through
/// [`MapCollaborator`] are applied to the plot on the next frame.
pub struct MapState {
    pub camera: MapCamera,
    bounds_pending: bool,
}

impl MapState {
    pub fn new(view: ViewConfig) -> Self {
        Self {
            camera: MapCamera::new(view),
            bounds_pending: true,
        }
    }

    /// Record where the user has panned/zoomed the plot to.
    pub fn sync_from_plot(&mut self, bounds: &PlotBounds, width_px: f32) {
        let center = bounds.center();
        self.camera.center = LatLng::new(center.y, center.x);
        self.camera.zoom = zoom_for_span(bounds.width(), width_px);
    }

    /// Plot bounds for a pending camera move, sized for a plot of `size` pixels.
    pub fn take_pending_bounds(&mut self, size: egui::Vec2) -> Option<PlotBounds> {
        if !self.bounds_pending || size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        self.bounds_pending = false;

        let lng_span = span_for_zoom(self.camera.zoom, size.x);
        let lat_span = lng_span * (size.y / size.x) as f64;
        let c = self.camera.center;
        Some(PlotBounds::from_min_max(
            [c.lng - lng_span / 2.0, c.lat - lat_span / 2.0],
            [c.lng + lng_span / 2.0, c.lat + lat_span / 2.0],
        ))
    }
}

impl MapCollaborator for MapState {
    fn zoom(&self) -> f64 {
        self.camera.zoom()
    }

    fn fly_to(&mut self, target: LatLng, zoom: f64) {
        self.camera.fly_to(target, zoom);
        self.bounds_pending = true;
    }

    fn recenter_to_default(&mut self) {
        self.camera.recenter_to_default();
        self.bounds_pending = true;
    }
}

/// Longitude span shown by a `width_px` wide map at `zoom`.
fn span_for_zoom(zoom: f64, width_px: f32) -> f64 {
    360.0 * width_px as f64 / (TILE_SIZE * 2f64.powf(zoom))
}

fn zoom_for_span(lng_span: f64, width_px: f32) -> f64 {
    if lng_span <= 0.0 || width_px <= 0.0 {
        return 0.0;
    }
    (360.0 * width_px as f64 / (TILE_SIZE * lng_span)).log2()
}
