pub mod map;
pub mod menu_bar;
pub mod popup;
pub mod status;

use travelmap_core::popup::style::Rgba;

pub(crate) fn rgba_color(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, (c.a.clamp(0.0, 1.0) * 255.0).round() as u8)
}
