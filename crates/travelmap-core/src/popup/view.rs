use crate::error::Result;
use crate::model::ImageRecord;

use super::style::{Affordance, FocusStyle};

/// Height of the popup container. The open/closed state lives in the
/// controller; this is only its projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupHeight {
    Collapsed,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButton {
    Previous,
    Next,
}

/// Element to bring into view with a smooth scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Title,
    Description,
}

/// Overflow mode of the info panel (title, tombstone, description).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoOverflow {
    Hidden,
    Scroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMore {
    Hidden,
    Visible,
}

/// Animation used for a gallery shift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransition {
    pub duration_secs: f32,
}

/// Heights of the rendered info panel content, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredHeights {
    pub title: f32,
    pub tombstone: f32,
    pub description: f32,
    pub divider: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentMeasurement {
    pub heights: MeasuredHeights,
    pub container_height: f32,
}

/// Rendering surface of the popup.
///
/// Every visible change the popup makes goes through this trait, so the
/// state machine can run against a real UI or a test double.
pub trait PopupView {
    fn set_page_title_opacity(&mut self, opacity: f32);
    fn set_popup_height(&mut self, height: PopupHeight);
    fn set_return_button_visible(&mut self, visible: bool);
    fn set_title(&mut self, title: &str);

    fn render_thumbnails(&mut self, slides: &[ImageRecord]);
    fn clear_thumbnails(&mut self);
    /// Shift the gallery strip to `offset` pixels, animated when `transition` is set.
    fn set_gallery_offset(&mut self, offset: f32, transition: Option<SlideTransition>);
    fn set_nav_button(&mut self, button: NavButton, affordance: Affordance);

    fn set_main_image(&mut self, url: &str);
    fn set_tombstone(&mut self, text: &str);
    fn set_description(&mut self, text: &str);
    fn scroll_into_view(&mut self, target: ScrollTarget);
    fn set_info_overflow(&mut self, overflow: InfoOverflow);
    fn set_read_more(&mut self, read_more: ReadMore);
    /// Measure the info panel as it would render with the current text.
    fn measure_content(&self) -> ContentMeasurement;

    fn apply_focus_style(&mut self, style: &FocusStyle);
    fn request_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self) -> Result<()>;
}
