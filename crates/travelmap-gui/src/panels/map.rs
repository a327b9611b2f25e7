use egui_plot::{Plot, PlotPoint, Points};
use travelmap_core::config::MarkerConfig;
use travelmap_core::consts::PAGE_TITLE_VISIBLE;
use travelmap_core::model::{FeatureCollection, LatLng};
use travelmap_core::popup::PopupEvent;

use crate::app::TravelMapApp;

const PAGE_TITLE: &str = "Travel Map";
/// Extra pixels around a marker that still count as a hit.
const HIT_SLOP: f32 = 2.0;

const DEFAULT_FILL: [u8; 3] = [0x00, 0xd4, 0x58];

pub fn show(ctx: &egui::Context, app: &mut TravelMapApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let area = ui.available_rect_before_wrap();
        crate::panels::popup::sync_host(ctx, ui, app, area);

        ui.horizontal(|ui| {
            let opacity = app.popup.view().page_title_opacity;
            ui.label(
                egui::RichText::new(PAGE_TITLE)
                    .heading()
                    .color(ui.visuals().strong_text_color().gamma_multiply(opacity / PAGE_TITLE_VISIBLE)),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset View").clicked() {
                    app.dispatch(PopupEvent::ResetView);
                }
            });
        });

        if app.features.is_empty() {
            show_placeholder(ui);
            return;
        }

        let size = ui.available_size();
        let pending = app.map.take_pending_bounds(size);
        let aspect = lat_aspect(app.map.camera.center.lat);
        let markers = &app.config.markers;
        let features = &app.features;

        let response = Plot::new("map")
            .data_aspect(aspect)
            .show_axes(false)
            .show_grid(false)
            .allow_double_click_reset(false)
            .allow_boxed_zoom(false)
            .auto_bounds(false)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{name}\n{:.4}, {:.4}", value.y, value.x)
                }
            })
            .show(ui, |plot_ui| {
                if let Some(bounds) = pending {
                    plot_ui.set_plot_bounds(bounds);
                }
                add_markers(plot_ui, features, markers);

                let clicked = if plot_ui.response().clicked() {
                    plot_ui
                        .response()
                        .interact_pointer_pos()
                        .and_then(|pos| hit_test(plot_ui, features, pos, markers.radius))
                } else {
                    None
                };
                let screen: Vec<egui::Pos2> = features
                    .features
                    .iter()
                    .map(|f| plot_ui.screen_from_plot(PlotPoint::new(f.position.lng, f.position.lat)))
                    .collect();
                (plot_ui.plot_bounds(), clicked, screen)
            });

        let (bounds, clicked, screen) = response.inner;
        paint_marker_outlines(ui, response.response.rect, &screen, markers);
        app.map.sync_from_plot(&bounds, response.response.rect.width());

        if let Some(index) = clicked {
            app.open_feature(index);
        }
    });
}

fn add_markers(plot_ui: &mut egui_plot::PlotUi, features: &FeatureCollection, markers: &MarkerConfig) {
    let [r, g, b] = markers.fill_rgb().unwrap_or(DEFAULT_FILL);
    let alpha = (markers.fill_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let fill = egui::Color32::from_rgba_unmultiplied(r, g, b, alpha);

    for feature in &features.features {
        plot_ui.points(
            Points::new(
                feature.name.clone(),
                vec![[feature.position.lng, feature.position.lat]],
            )
            .radius(markers.radius)
            .color(fill)
            .filled(true),
        );
    }
}

/// egui_plot points have no stroke width, so outlines are painted on top.
fn paint_marker_outlines(
    ui: &egui::Ui,
    clip: egui::Rect,
    screen: &[egui::Pos2],
    markers: &MarkerConfig,
) {
    if markers.stroke_width <= 0.0 {
        return;
    }
    let [r, g, b] = markers.stroke_rgb().unwrap_or([0, 0, 0]);
    let stroke = egui::Stroke::new(markers.stroke_width, egui::Color32::from_rgb(r, g, b));
    let painter = ui.painter_at(clip);
    for &pos in screen {
        painter.circle_stroke(pos, markers.radius, stroke);
    }
}

/// Index of the marker under `pos`, if the nearest one is within reach.
fn hit_test(
    plot_ui: &egui_plot::PlotUi,
    features: &FeatureCollection,
    pos: egui::Pos2,
    radius: f32,
) -> Option<usize> {
    let at = plot_ui.plot_from_screen(pos);
    let (index, _) = features.nearest(LatLng::new(at.y, at.x))?;
    let feature = features.features.get(index)?;
    let center = plot_ui.screen_from_plot(PlotPoint::new(feature.position.lng, feature.position.lat));
    (center.distance(pos) <= radius + HIT_SLOP).then_some(index)
}

/// Screen ratio of one degree of latitude to one degree of longitude.
fn lat_aspect(lat: f64) -> f32 {
    (1.0 / lat.to_radians().cos().max(0.01)) as f32
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a points file to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
