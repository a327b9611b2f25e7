use crate::config::PopupConfig;

use super::view::{InfoOverflow, MeasuredHeights, PopupView, ReadMore, ScrollTarget};

/// Decides whether the info panel needs a "read more" button.
#[derive(Clone, Debug)]
pub struct OverflowGate {
    padding_unit: f32,
    padding_multiplier: f32,
    overflowing: bool,
    scroll_enabled: bool,
}

impl OverflowGate {
    pub fn new(config: &PopupConfig) -> Self {
        Self {
            padding_unit: config.padding_unit,
            padding_multiplier: config.padding_multiplier,
            overflowing: false,
            scroll_enabled: false,
        }
    }

    /// Height the text needs: the three text blocks, both dividers and the
    /// reserved padding.
    pub fn required_height(&self, heights: &MeasuredHeights) -> f32 {
        heights.title
            + heights.tombstone
            + heights.description
            + heights.divider * 2.0
            + self.padding_unit * self.padding_multiplier
    }

    /// `true` when the content does not fit into `container_height`.
    pub fn evaluate(&self, heights: &MeasuredHeights, container_height: f32) -> bool {
        let overflowing = self.required_height(heights) > container_height;
        if overflowing {
            tracing::debug!("Description out of bounds");
        }
        overflowing
    }

    /// Result of the last [`apply`](Self::apply).
    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Whether the "read more" button is currently offered.
    pub fn read_more_available(&self) -> bool {
        self.overflowing && !self.scroll_enabled
    }

    /// Show or hide "read more" for an evaluation result. Scrolling stays off.
    pub fn apply(&mut self, overflowing: bool, view: &mut dyn PopupView) {
        self.overflowing = overflowing;
        let read_more = if overflowing {
            ReadMore::Visible
        } else {
            ReadMore::Hidden
        };
        view.set_read_more(read_more);
    }

    /// Let the user scroll the info panel and bring the description into view.
    pub fn enable_scroll(&mut self, view: &mut dyn PopupView) {
        self.scroll_enabled = true;
        view.set_info_overflow(InfoOverflow::Scroll);
        view.scroll_into_view(ScrollTarget::Description);
        view.set_read_more(ReadMore::Hidden);
    }

    pub fn disable_scroll(&mut self, view: &mut dyn PopupView) {
        self.scroll_enabled = false;
        view.set_info_overflow(InfoOverflow::Hidden);
    }
}
