use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTER, DEFAULT_DATA_FILE, INITIAL_ZOOM, LOCAL_ZOOM,
    MAXBOUND_CORNER_ONE, MAXBOUND_CORNER_TWO, MAX_ZOOM, MIN_ZOOM, OVERFLOW_PADDING_MULTIPLIER,
    POPUP_INFO_PADDING, SLIDE_TRANSITION_SECS, SLIDE_WIDTH,
};
use crate::error::{Result, TravelMapError};
use crate::model::LatLng;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// GeoJSON feature collection with the map points.
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: LatLng,
    pub initial_zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Clicking a feature while zoomed out further than this flies the map in first.
    pub local_zoom: f64,
    pub max_bounds: [LatLng; 2],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::from(CENTER),
            initial_zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            local_zoom: LOCAL_ZOOM,
            max_bounds: [
                LatLng::from(MAXBOUND_CORNER_ONE),
                LatLng::from(MAXBOUND_CORNER_TWO),
            ],
        }
    }
}

impl ViewConfig {
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Pull `position` inside the max bounds rectangle.
    pub fn clamp_position(&self, position: LatLng) -> LatLng {
        let [a, b] = self.max_bounds;
        LatLng::new(
            position.lat.clamp(a.lat.min(b.lat), a.lat.max(b.lat)),
            position.lng.clamp(a.lng.min(b.lng), a.lng.max(b.lng)),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Horizontal shift per slide, in pixels.
    pub slide_width: f32,
    pub transition_secs: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            slide_width: SLIDE_WIDTH,
            transition_secs: SLIDE_TRANSITION_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub padding_unit: f32,
    pub padding_multiplier: f32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            padding_unit: POPUP_INFO_PADDING,
            padding_multiplier: OVERFLOW_PADDING_MULTIPLIER,
        }
    }
}

/// Circle marker appearance on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub radius: f32,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f32,
    pub fill_opacity: f32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 14.0,
            fill_color: "#00d458".into(),
            stroke_color: "#000".into(),
            stroke_width: 2.0,
            fill_opacity: 0.7,
        }
    }
}

impl MarkerConfig {
    pub fn fill_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.fill_color)
    }

    pub fn stroke_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.stroke_color)
    }
}

/// Parse `#rgb` or `#rrggbb`.
pub fn parse_hex_color(s: &str) -> Result<[u8; 3]> {
    let invalid = || TravelMapError::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                rgb[i] = v * 17;
            }
            Ok(rgb)
        }
        6 => Ok([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ]),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_each_digit() {
        assert_eq!(parse_hex_color("#000").unwrap(), [0, 0, 0]);
        assert_eq!(parse_hex_color("#fa0").unwrap(), [255, 170, 0]);
    }

    #[test]
    fn long_hex_parses_channels() {
        assert_eq!(parse_hex_color("#00d458").unwrap(), [0x00, 0xd4, 0x58]);
    }

    #[test]
    fn hex_without_hash_is_rejected() {
        assert!(parse_hex_color("00d458").is_err());
        assert!(parse_hex_color("#00d45").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
