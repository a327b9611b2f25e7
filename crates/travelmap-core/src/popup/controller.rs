use crate::config::MapConfig;
use crate::consts::{MAIN_IMAGE, PAGE_TITLE_VISIBLE};
use crate::error::{Result, TravelMapError};
use crate::map::{FeatureClicked, MapCollaborator};
use crate::model::GallerySlideSet;

use super::event::PopupEvent;
use super::gallery::GalleryTrack;
use super::selector::SlideSelector;
use super::style::FocusStyle;
use super::view::{PopupHeight, PopupView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupVisibility {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusState {
    Normal,
    FullscreenImage,
}

/// The InteractivePopup: a full-screen overlay with title, description and
/// an image gallery for one map feature.
///
/// All popup state lives here; rendering goes through the injected view.
pub struct PopupController<V: PopupView> {
    view: V,
    track: GalleryTrack,
    selector: SlideSelector,
    local_zoom: f64,
    visibility: PopupVisibility,
    focus: FocusState,
    title: String,
    slides: GallerySlideSet,
    /// Number of thumbnails wired to `select_thumbnail` for this open.
    bound_thumbnails: usize,
    selected: Option<usize>,
}

impl<V: PopupView> PopupController<V> {
    pub fn new(view: V, config: &MapConfig) -> Self {
        Self {
            view,
            track: GalleryTrack::new(&config.gallery),
            selector: SlideSelector::new(&config.popup),
            local_zoom: config.view.local_zoom,
            visibility: PopupVisibility::Closed,
            focus: FocusState::Normal,
            title: String::new(),
            slides: GallerySlideSet::default(),
            bound_thumbnails: 0,
            selected: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn visibility(&self) -> PopupVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PopupVisibility::Open
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &GallerySlideSet {
        &self.slides
    }

    pub fn gallery(&self) -> &GalleryTrack {
        &self.track
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_overflowing(&self) -> bool {
        self.selector.gate().is_overflowing()
    }

    pub fn read_more_available(&self) -> bool {
        self.is_open() && self.selector.gate().read_more_available()
    }

    /// Show the popup for `title` with `slides`, selecting the first slide.
    ///
    /// An empty slide set is rejected and leaves the popup as it was.
    pub fn open(&mut self, title: &str, slides: GallerySlideSet) -> Result<()> {
        if slides.is_empty() {
            tracing::warn!("Not opening popup for '{title}': feature has no images");
            return Err(TravelMapError::EmptyGallery);
        }

        if self.is_open() {
            tracing::debug!("Replacing open popup '{}'", self.title);
            if self.focus == FocusState::FullscreenImage {
                self.leave_image_focus();
            }
            self.view.clear_thumbnails();
        }

        tracing::info!("Opening popup '{title}' with {} images", slides.len());
        self.view.set_page_title_opacity(0.0);
        self.view.set_title(title);
        self.view.render_thumbnails(slides.as_slice());
        self.track.build(&slides, &mut self.view);
        self.bound_thumbnails = slides.len();

        // Thumbnails only scroll the title back when the popup is already up.
        let popup_visible = self.is_open();
        if let Some(first) = slides.get(MAIN_IMAGE) {
            self.selector.select(first, popup_visible, &mut self.view);
        }

        self.view.set_popup_height(PopupHeight::Full);
        self.view.set_return_button_visible(true);

        self.title = title.to_string();
        self.slides = slides;
        self.selected = Some(MAIN_IMAGE);
        self.visibility = PopupVisibility::Open;
        self.focus = FocusState::Normal;
        Ok(())
    }

    /// Hide the popup and drop its slides. A focused image is released first
    /// so the platform never stays in fullscreen.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        if self.focus == FocusState::FullscreenImage {
            self.leave_image_focus();
        }

        self.view.set_popup_height(PopupHeight::Collapsed);
        self.view.clear_thumbnails();
        self.view.set_return_button_visible(false);
        self.track.reset();
        self.view.set_page_title_opacity(PAGE_TITLE_VISIBLE);

        tracing::info!("Closed popup '{}'", self.title);
        self.title.clear();
        self.slides = GallerySlideSet::default();
        self.bound_thumbnails = 0;
        self.selected = None;
        self.visibility = PopupVisibility::Closed;
    }

    pub fn advance(&mut self) -> bool {
        self.is_open() && self.track.advance(&mut self.view)
    }

    pub fn retreat(&mut self) -> bool {
        self.is_open() && self.track.retreat(&mut self.view)
    }

    /// Select the slide behind thumbnail `index`.
    pub fn select_thumbnail(&mut self, index: usize) -> Result<()> {
        if !self.is_open() {
            tracing::debug!("Ignoring thumbnail {index}: popup closed");
            return Ok(());
        }
        if index >= self.bound_thumbnails {
            return Err(TravelMapError::SlideOutOfRange {
                index,
                total: self.bound_thumbnails,
            });
        }
        if let Some(record) = self.slides.get(index) {
            self.selector.select(record, true, &mut self.view);
            self.selected = Some(index);
        }
        Ok(())
    }

    /// Unlock scrolling of the info panel. Only does something while the
    /// "read more" button is offered.
    pub fn read_more(&mut self) -> bool {
        if !self.read_more_available() {
            return false;
        }
        self.selector.gate_mut().enable_scroll(&mut self.view);
        true
    }

    /// Switch the main image between its panel and fullscreen.
    pub fn toggle_image_focus(&mut self) {
        if !self.is_open() {
            return;
        }
        match self.focus {
            FocusState::Normal => self.enter_image_focus(),
            FocusState::FullscreenImage => self.leave_image_focus(),
        }
    }

    pub fn handle_escape(&mut self) {
        if self.focus == FocusState::FullscreenImage {
            self.leave_image_focus();
        }
    }

    pub fn handle_reset_view(&mut self, map: &mut dyn MapCollaborator) {
        map.recenter_to_default();
    }

    /// Open the popup for a clicked feature, flying the map in first when it
    /// is zoomed out past the local zoom level.
    pub fn handle_feature_click(
        &mut self,
        event: FeatureClicked,
        map: &mut dyn MapCollaborator,
    ) -> Result<()> {
        if event.zoom < self.local_zoom {
            map.fly_to(event.coordinates, self.local_zoom);
        }
        self.open(&event.title, event.images)
    }

    pub fn dispatch(&mut self, event: PopupEvent, map: &mut dyn MapCollaborator) -> Result<()> {
        match event {
            PopupEvent::ResetView => self.handle_reset_view(map),
            PopupEvent::PreviousSlide => {
                self.retreat();
            }
            PopupEvent::NextSlide => {
                self.advance();
            }
            PopupEvent::Close => self.close(),
            PopupEvent::Thumbnail(index) => self.select_thumbnail(index)?,
            PopupEvent::Escape => self.handle_escape(),
            PopupEvent::MainImageClicked => self.toggle_image_focus(),
            PopupEvent::ReadMore => {
                self.read_more();
            }
        }
        Ok(())
    }

    fn enter_image_focus(&mut self) {
        if let Err(err) = self.view.request_fullscreen() {
            tracing::warn!("Image stays in its panel: {err}");
            return;
        }
        self.view.apply_focus_style(&FocusStyle::fullscreen());
        self.focus = FocusState::FullscreenImage;
    }

    fn leave_image_focus(&mut self) {
        self.view.apply_focus_style(&FocusStyle::windowed());
        if let Err(err) = self.view.exit_fullscreen() {
            tracing::warn!("Leaving fullscreen failed: {err}");
        }
        self.focus = FocusState::Normal;
    }
}
