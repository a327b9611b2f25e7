#![allow(dead_code)]

use travelmap_core::config::MapConfig;
use travelmap_core::error::{Result, TravelMapError};
use travelmap_core::map::MapCollaborator;
use travelmap_core::model::{GallerySlideSet, ImageRecord, LatLng};
use travelmap_core::popup::style::{Affordance, FocusStyle};
use travelmap_core::popup::view::{
    ContentMeasurement, InfoOverflow, NavButton, PopupHeight, ReadMore, ScrollTarget,
    SlideTransition,
};
use travelmap_core::popup::{PopupController, PopupScene, PopupView, SceneHost, TextRegion};

/// Host that lays text out as fixed-width lines.
#[derive(Debug)]
pub struct FakeHost {
    pub chars_per_line: usize,
    pub line_height: f32,
    pub divider: f32,
    pub container: f32,
    pub deny_fullscreen: bool,
    pub fullscreen_requests: usize,
    pub fullscreen_exits: usize,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            chars_per_line: 40,
            line_height: 20.0,
            divider: 2.0,
            container: 600.0,
            deny_fullscreen: false,
            fullscreen_requests: 0,
            fullscreen_exits: 0,
        }
    }
}

impl SceneHost for FakeHost {
    fn text_height(&self, _region: TextRegion, text: &str) -> f32 {
        let lines = text.chars().count().div_ceil(self.chars_per_line);
        lines as f32 * self.line_height
    }

    fn divider_height(&self) -> f32 {
        self.divider
    }

    fn container_height(&self) -> f32 {
        self.container
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.fullscreen_requests += 1;
        if self.deny_fullscreen {
            return Err(TravelMapError::Fullscreen("denied by test host".into()));
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.fullscreen_exits += 1;
        Ok(())
    }
}

pub type TestController = PopupController<PopupScene<FakeHost>>;

pub fn controller() -> TestController {
    controller_with_host(FakeHost::default())
}

pub fn controller_with_host(host: FakeHost) -> TestController {
    PopupController::new(PopupScene::new(host), &MapConfig::default())
}

/// `n` records named `img0.jpg`, `img1.jpg`, ... with short descriptions.
pub fn records(n: usize) -> GallerySlideSet {
    (0..n)
        .map(|i| {
            ImageRecord::new(format!("img{i}.jpg"), format!("tombstone {i}"))
                .with_description(format!("description {i}"))
        })
        .collect()
}

/// A view call, as seen by [`RecordingView`].
#[derive(Clone, Debug, PartialEq)]
pub enum ViewCall {
    PageTitleOpacity(f32),
    PopupHeight(PopupHeight),
    ReturnButton(bool),
    Title(String),
    RenderThumbnails(usize),
    ClearThumbnails,
    GalleryOffset(f32, Option<SlideTransition>),
    Nav(NavButton, Affordance),
    MainImage(String),
    Tombstone(String),
    Description(String),
    Scroll(ScrollTarget),
    InfoOverflow(InfoOverflow),
    ReadMore(ReadMore),
    FocusStyle(FocusStyle),
    RequestFullscreen,
    ExitFullscreen,
}

/// View that records every call and reports a fixed measurement.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub measurement: ContentMeasurement,
}

impl RecordingView {
    pub fn offset_updates(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ViewCall::GalleryOffset(..)))
            .count()
    }

    pub fn last_nav(&self, button: NavButton) -> Option<Affordance> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Nav(b, a) if *b == button => Some(*a),
            _ => None,
        })
    }
}

impl PopupView for RecordingView {
    fn set_page_title_opacity(&mut self, opacity: f32) {
        self.calls.push(ViewCall::PageTitleOpacity(opacity));
    }
    fn set_popup_height(&mut self, height: PopupHeight) {
        self.calls.push(ViewCall::PopupHeight(height));
    }
    fn set_return_button_visible(&mut self, visible: bool) {
        self.calls.push(ViewCall::ReturnButton(visible));
    }
    fn set_title(&mut self, title: &str) {
        self.calls.push(ViewCall::Title(title.into()));
    }
    fn render_thumbnails(&mut self, slides: &[ImageRecord]) {
        self.calls.push(ViewCall::RenderThumbnails(slides.len()));
    }
    fn clear_thumbnails(&mut self) {
        self.calls.push(ViewCall::ClearThumbnails);
    }
    fn set_gallery_offset(&mut self, offset: f32, transition: Option<SlideTransition>) {
        self.calls.push(ViewCall::GalleryOffset(offset, transition));
    }
    fn set_nav_button(&mut self, button: NavButton, affordance: Affordance) {
        self.calls.push(ViewCall::Nav(button, affordance));
    }
    fn set_main_image(&mut self, url: &str) {
        self.calls.push(ViewCall::MainImage(url.into()));
    }
    fn set_tombstone(&mut self, text: &str) {
        self.calls.push(ViewCall::Tombstone(text.into()));
    }
    fn set_description(&mut self, text: &str) {
        self.calls.push(ViewCall::Description(text.into()));
    }
    fn scroll_into_view(&mut self, target: ScrollTarget) {
        self.calls.push(ViewCall::Scroll(target));
    }
    fn set_info_overflow(&mut self, overflow: InfoOverflow) {
        self.calls.push(ViewCall::InfoOverflow(overflow));
    }
    fn set_read_more(&mut self, read_more: ReadMore) {
        self.calls.push(ViewCall::ReadMore(read_more));
    }
    fn measure_content(&self) -> ContentMeasurement {
        self.measurement
    }
    fn apply_focus_style(&mut self, style: &FocusStyle) {
        self.calls.push(ViewCall::FocusStyle(*style));
    }
    fn request_fullscreen(&mut self) -> Result<()> {
        self.calls.push(ViewCall::RequestFullscreen);
        Ok(())
    }
    fn exit_fullscreen(&mut self) -> Result<()> {
        self.calls.push(ViewCall::ExitFullscreen);
        Ok(())
    }
}

/// Map double that records camera requests.
#[derive(Debug, Default)]
pub struct FakeMap {
    pub zoom: f64,
    pub flights: Vec<(LatLng, f64)>,
    pub recenters: usize,
}

impl FakeMap {
    pub fn at_zoom(zoom: f64) -> Self {
        Self {
            zoom,
            ..Default::default()
        }
    }
}

impl MapCollaborator for FakeMap {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn fly_to(&mut self, target: LatLng, zoom: f64) {
        self.flights.push((target, zoom));
        self.zoom = zoom;
    }

    fn recenter_to_default(&mut self) {
        self.recenters += 1;
    }
}
