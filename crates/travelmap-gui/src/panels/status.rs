use travelmap_core::map::MapCollaborator;
use travelmap_core::popup::FocusState;

use crate::app::TravelMapApp;

pub fn show(ctx: &egui::Context, app: &mut TravelMapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .id_salt("log")
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if app.ui_state.loading {
                ui.spinner();
                ui.label("Loading...");
                ui.separator();
            } else if let Some(ref path) = app.ui_state.data_path {
                ui.label(format!("{} points", app.features.len()));
                ui.label(
                    egui::RichText::new(path.display().to_string())
                        .small()
                        .color(egui::Color32::from_gray(140)),
                );
                ui.separator();
            }
            ui.label(format!("Center: {}", app.map.camera.center));
            ui.separator();
            ui.label(format!("Zoom: {:.1}", app.map.zoom()));
            if app.popup.is_open() {
                ui.separator();
                let gallery = app.popup.gallery().state();
                ui.label(format!(
                    "{}: slide {}/{}",
                    app.popup.title(),
                    app.popup.selected_index().map_or(0, |i| i + 1),
                    gallery.slide_count
                ));
                if app.popup.focus() == FocusState::FullscreenImage {
                    ui.separator();
                    ui.label("Fullscreen (Esc to exit)");
                }
            }
        });

        ui.add_space(2.0);
    });
}
