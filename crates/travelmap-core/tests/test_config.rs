use approx::assert_relative_eq;
use travelmap_core::config::{MapConfig, ViewConfig};
use travelmap_core::map::{MapCamera, MapCollaborator};
use travelmap_core::model::LatLng;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_view() {
    let view = ViewConfig::default();
    assert_eq!(view.center, LatLng::new(39.8588, -2.6));
    assert_relative_eq!(view.initial_zoom, 7.0);
    assert_relative_eq!(view.local_zoom, 15.0);
    assert_relative_eq!(view.min_zoom, 5.0);
    assert_relative_eq!(view.max_zoom, 20.0);
}

#[test]
fn test_default_gallery_and_popup() {
    let config = MapConfig::default();
    assert_relative_eq!(config.gallery.slide_width, 400.0);
    assert_relative_eq!(config.gallery.transition_secs, 0.4);
    assert_relative_eq!(config.popup.padding_unit, 10.0);
    assert_relative_eq!(config.popup.padding_multiplier, 10.0);
}

#[test]
fn test_default_marker_colors_parse() {
    let markers = MapConfig::default().markers;
    assert_eq!(markers.fill_rgb().unwrap(), [0x00, 0xd4, 0x58]);
    assert_eq!(markers.stroke_rgb().unwrap(), [0, 0, 0]);
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_round_trip() {
    let config = MapConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: MapConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let parsed: MapConfig = toml::from_str(
        r#"
        [gallery]
        slide_width = 320.0

        [view]
        center = [37.18, -3.6]
        "#,
    )
    .unwrap();
    assert_relative_eq!(parsed.gallery.slide_width, 320.0);
    assert_relative_eq!(parsed.gallery.transition_secs, 0.4);
    assert_eq!(parsed.view.center, LatLng::new(37.18, -3.6));
    assert_relative_eq!(parsed.view.local_zoom, 15.0);
    assert_eq!(parsed.markers, MapConfig::default().markers);
}

#[test]
fn test_empty_toml_is_default() {
    let parsed: MapConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, MapConfig::default());
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

#[test]
fn test_camera_starts_at_configured_view() {
    let camera = MapCamera::new(ViewConfig::default());
    assert_eq!(camera.center, LatLng::new(39.8588, -2.6));
    assert_relative_eq!(camera.zoom(), 7.0);
}

#[test]
fn test_camera_fly_to_clamps_zoom_and_bounds() {
    let mut camera = MapCamera::new(ViewConfig::default());
    camera.fly_to(LatLng::new(60.0, 30.0), 25.0);
    assert_relative_eq!(camera.zoom(), 20.0);
    assert_relative_eq!(camera.center.lat, 46.270583);
    assert_relative_eq!(camera.center.lng, 9.62125);
}

#[test]
fn test_camera_recenter() {
    let mut camera = MapCamera::new(ViewConfig::default());
    camera.fly_to(LatLng::new(37.18, -3.6), 15.0);
    camera.recenter_to_default();
    assert_eq!(camera.center, ViewConfig::default().center);
    assert_relative_eq!(camera.zoom(), 7.0);
}
