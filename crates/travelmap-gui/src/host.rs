use travelmap_core::error::{Result, TravelMapError};
use travelmap_core::popup::{SceneHost, TextRegion};

const TITLE_SIZE: f32 = 24.0;
const TOMBSTONE_SIZE: f32 = 14.0;
const DESCRIPTION_SIZE: f32 = 15.0;

/// Font used for each info panel region.
pub fn region_font(region: TextRegion) -> egui::FontId {
    match region {
        TextRegion::Title => egui::FontId::proportional(TITLE_SIZE),
        TextRegion::Tombstone => egui::FontId::proportional(TOMBSTONE_SIZE),
        TextRegion::Description => egui::FontId::proportional(DESCRIPTION_SIZE),
    }
}

/// [`SceneHost`] backed by the egui context. The info panel size is
/// updated by the popup panel every frame before events are handled.
pub struct EguiHost {
    ctx: egui::Context,
    panel_width: f32,
    panel_height: f32,
    divider: f32,
}

impl EguiHost {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            panel_width: 400.0,
            panel_height: 600.0,
            divider: 9.0,
        }
    }

    pub fn set_panel_size(&mut self, size: egui::Vec2, divider: f32) {
        self.panel_width = size.x.max(1.0);
        self.panel_height = size.y.max(0.0);
        self.divider = divider;
    }
}

impl SceneHost for EguiHost {
    fn text_height(&self, region: TextRegion, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let font = region_font(region);
        let galley = self.ctx.fonts_mut(|f| {
            f.layout(
                text.to_owned(),
                font,
                egui::Color32::WHITE,
                self.panel_width,
            )
        });
        galley.size().y
    }

    fn divider_height(&self) -> f32 {
        self.divider
    }

    fn container_height(&self) -> f32 {
        self.panel_height
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        let supported = self.ctx.input(|i| i.viewport().fullscreen.is_some());
        if !supported {
            return Err(TravelMapError::Fullscreen(
                "window manager does not report fullscreen state".into(),
            ));
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(false));
        Ok(())
    }
}
