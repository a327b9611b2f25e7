use crate::consts::PAGE_TITLE_VISIBLE;
use crate::error::Result;
use crate::model::ImageRecord;

use super::style::{Affordance, FocusStyle};
use super::view::{
    ContentMeasurement, InfoOverflow, MeasuredHeights, NavButton, PopupHeight, PopupView,
    ReadMore, ScrollTarget, SlideTransition,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRegion {
    Title,
    Tombstone,
    Description,
}

/// Platform services a [`PopupScene`] cannot provide by itself.
pub trait SceneHost {
    /// Rendered height of `text` in the given info panel region.
    fn text_height(&self, region: TextRegion, text: &str) -> f32;
    fn divider_height(&self) -> f32;
    /// Visible height of the info panel.
    fn container_height(&self) -> f32;
    fn request_fullscreen(&mut self) -> Result<()>;
    fn exit_fullscreen(&mut self) -> Result<()>;
}

/// Retained picture of the popup. Renderers paint from these fields each frame.
#[derive(Debug)]
pub struct PopupScene<H> {
    host: H,
    pub page_title_opacity: f32,
    pub height: PopupHeight,
    pub return_button_visible: bool,
    pub title: String,
    pub main_image: Option<String>,
    pub tombstone: String,
    pub description: String,
    pub thumbnails: Vec<String>,
    pub gallery_offset: f32,
    pub gallery_transition: Option<SlideTransition>,
    pub prev_button: Affordance,
    pub next_button: Affordance,
    pub info_overflow: InfoOverflow,
    pub read_more: ReadMore,
    pub focus_style: FocusStyle,
    pub platform_fullscreen: bool,
    pending_scroll: Option<ScrollTarget>,
}

impl<H: SceneHost> PopupScene<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            page_title_opacity: PAGE_TITLE_VISIBLE,
            height: PopupHeight::Collapsed,
            return_button_visible: false,
            title: String::new(),
            main_image: None,
            tombstone: String::new(),
            description: String::new(),
            thumbnails: Vec::new(),
            gallery_offset: 0.0,
            gallery_transition: None,
            prev_button: Affordance::Disabled,
            next_button: Affordance::Disabled,
            info_overflow: InfoOverflow::Hidden,
            read_more: ReadMore::Hidden,
            focus_style: FocusStyle::windowed(),
            platform_fullscreen: false,
            pending_scroll: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Scroll request left for the renderer; consumed on read.
    pub fn take_scroll_request(&mut self) -> Option<ScrollTarget> {
        self.pending_scroll.take()
    }

    pub fn is_visible(&self) -> bool {
        self.height == PopupHeight::Full
    }
}

impl<H: SceneHost> PopupView for PopupScene<H> {
    fn set_page_title_opacity(&mut self, opacity: f32) {
        self.page_title_opacity = opacity;
    }

    fn set_popup_height(&mut self, height: PopupHeight) {
        self.height = height;
    }

    fn set_return_button_visible(&mut self, visible: bool) {
        self.return_button_visible = visible;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn render_thumbnails(&mut self, slides: &[ImageRecord]) {
        self.thumbnails
            .extend(slides.iter().map(|r| r.image_url.clone()));
    }

    fn clear_thumbnails(&mut self) {
        self.thumbnails.clear();
    }

    fn set_gallery_offset(&mut self, offset: f32, transition: Option<SlideTransition>) {
        self.gallery_offset = offset;
        self.gallery_transition = transition;
    }

    fn set_nav_button(&mut self, button: NavButton, affordance: Affordance) {
        match button {
            NavButton::Previous => self.prev_button = affordance,
            NavButton::Next => self.next_button = affordance,
        }
    }

    fn set_main_image(&mut self, url: &str) {
        self.main_image = Some(url.to_string());
    }

    fn set_tombstone(&mut self, text: &str) {
        self.tombstone = text.to_string();
    }

    fn set_description(&mut self, text: &str) {
        self.description = text.to_string();
    }

    fn scroll_into_view(&mut self, target: ScrollTarget) {
        self.pending_scroll = Some(target);
    }

    fn set_info_overflow(&mut self, overflow: InfoOverflow) {
        self.info_overflow = overflow;
    }

    fn set_read_more(&mut self, read_more: ReadMore) {
        self.read_more = read_more;
    }

    fn measure_content(&self) -> ContentMeasurement {
        ContentMeasurement {
            heights: MeasuredHeights {
                title: self.host.text_height(TextRegion::Title, &self.title),
                tombstone: self.host.text_height(TextRegion::Tombstone, &self.tombstone),
                description: self
                    .host
                    .text_height(TextRegion::Description, &self.description),
                divider: self.host.divider_height(),
            },
            container_height: self.host.container_height(),
        }
    }

    fn apply_focus_style(&mut self, style: &FocusStyle) {
        self.focus_style = *style;
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.host.request_fullscreen()?;
        self.platform_fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.platform_fullscreen = false;
        self.host.exit_fullscreen()
    }
}
