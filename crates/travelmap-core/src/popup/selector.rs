use crate::config::PopupConfig;
use crate::model::ImageRecord;

use super::overflow::OverflowGate;
use super::view::{PopupView, ScrollTarget};

/// Puts one image record on screen and re-checks the info panel overflow.
#[derive(Clone, Debug)]
pub struct SlideSelector {
    gate: OverflowGate,
}

impl SlideSelector {
    pub fn new(config: &PopupConfig) -> Self {
        Self {
            gate: OverflowGate::new(config),
        }
    }

    pub fn gate(&self) -> &OverflowGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut OverflowGate {
        &mut self.gate
    }

    /// Show `record` and return whether its text overflows the info panel.
    ///
    /// With `popup_open` set the title is scrolled back into view, for when a
    /// thumbnail is picked while the description was scrolled down.
    pub fn select(
        &mut self,
        record: &ImageRecord,
        popup_open: bool,
        view: &mut dyn PopupView,
    ) -> bool {
        if popup_open {
            view.scroll_into_view(ScrollTarget::Title);
        }

        view.set_main_image(&record.image_url);
        view.set_tombstone(&record.tombstone);
        view.set_description(record.description_text());

        self.gate.disable_scroll(view);
        self.gate.apply(false, view);
        let measured = view.measure_content();
        let overflowing = self
            .gate
            .evaluate(&measured.heights, measured.container_height);
        if overflowing {
            self.gate.apply(true, view);
        }
        overflowing
    }
}
