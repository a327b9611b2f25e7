use crate::config::GalleryConfig;
use crate::consts::GALLERY_SCROLL_BUFFER;
use crate::model::GallerySlideSet;

use super::style::Affordance;
use super::view::{NavButton, PopupView, SlideTransition};

/// Index/count pair tracked by the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub current_index: usize,
    pub slide_count: usize,
}

/// Horizontal gallery strip of an open popup.
///
/// The index never exceeds `slide_count - GALLERY_SCROLL_BUFFER`; with
/// `slide_count <= GALLERY_SCROLL_BUFFER` it stays at 0.
#[derive(Clone, Debug)]
pub struct GalleryTrack {
    state: GalleryState,
    slide_width: f32,
    transition: SlideTransition,
}

impl GalleryTrack {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            state: GalleryState::default(),
            slide_width: config.slide_width,
            transition: SlideTransition {
                duration_secs: config.transition_secs,
            },
        }
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count
    }

    /// Highest index the gallery can scroll to.
    pub fn max_index(&self) -> usize {
        self.state.slide_count.saturating_sub(GALLERY_SCROLL_BUFFER)
    }

    pub fn offset(&self) -> f32 {
        -(self.slide_width * self.state.current_index as f32)
    }

    pub fn can_advance(&self) -> bool {
        self.state.current_index < self.max_index()
    }

    pub fn can_retreat(&self) -> bool {
        self.state.current_index > 0
    }

    /// Start over with a new slide set: index 0, offset 0, "previous" off.
    pub fn build(&mut self, slides: &GallerySlideSet, view: &mut dyn PopupView) {
        self.state = GalleryState {
            current_index: 0,
            slide_count: slides.len(),
        };
        view.set_gallery_offset(self.offset(), None);
        view.set_nav_button(NavButton::Previous, Affordance::Disabled);
        view.set_nav_button(
            NavButton::Next,
            Affordance::from_enabled(self.state.slide_count > GALLERY_SCROLL_BUFFER),
        );
    }

    /// Shift one slide forward. Returns `false` (and changes nothing) at the end.
    pub fn advance(&mut self, view: &mut dyn PopupView) -> bool {
        if !self.can_advance() {
            tracing::debug!(
                "Last slide reached: no next (index {})",
                self.state.current_index
            );
            return false;
        }

        self.state.current_index += 1;
        view.set_gallery_offset(self.offset(), Some(self.transition));
        view.set_nav_button(NavButton::Previous, Affordance::Enabled);
        if self.state.current_index == self.max_index() {
            view.set_nav_button(NavButton::Next, Affordance::Disabled);
        }
        true
    }

    /// Shift one slide back. Returns `false` (and changes nothing) at the start.
    pub fn retreat(&mut self, view: &mut dyn PopupView) -> bool {
        if !self.can_retreat() {
            tracing::debug!("First slide reached: no previous");
            return false;
        }

        self.state.current_index -= 1;
        view.set_gallery_offset(self.offset(), Some(self.transition));
        view.set_nav_button(NavButton::Next, Affordance::Enabled);
        if self.state.current_index == 0 {
            view.set_nav_button(NavButton::Previous, Affordance::Disabled);
        }
        true
    }

    /// Forget the current position without touching the view.
    pub fn reset(&mut self) {
        self.state = GalleryState::default();
    }
}
