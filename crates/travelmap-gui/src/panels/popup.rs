use egui::{pos2, vec2, Rect};
use travelmap_core::popup::style::{FocusStyle, FrameStyle, ImageStyle};
use travelmap_core::popup::view::{InfoOverflow, ReadMore, ScrollTarget};
use travelmap_core::popup::{PopupEvent, TextRegion};

use crate::app::TravelMapApp;
use crate::host::{region_font, EguiHost};
use crate::panels::rgba_color;

type Scene = travelmap_core::popup::PopupScene<EguiHost>;

const RETURN_BAR_HEIGHT: f32 = 40.0;
const GALLERY_HEIGHT: f32 = 140.0;
const ARROW_WIDTH: f32 = 36.0;
const THUMB_GAP: f32 = 8.0;
const DIVIDER_SPACING: f32 = 8.0;
const COLUMN_MARGIN: f32 = 20.0;
const READ_MORE_HEIGHT: f32 = 28.0;

/// Screen rectangles of the popup regions.
struct PopupLayout {
    return_bar: Rect,
    image_frame: Rect,
    info: Rect,
    gallery: Rect,
}

impl PopupLayout {
    fn new(area: Rect, viewport: Rect, style: &FocusStyle) -> Self {
        let return_bar = Rect::from_min_size(area.min, vec2(area.width(), RETURN_BAR_HEIGHT));

        let column_left = area.center().x + COLUMN_MARGIN;
        let column_right = (area.max.x - 2.0 * COLUMN_MARGIN).max(column_left);
        let gallery = Rect::from_min_max(
            pos2(column_left, area.max.y - COLUMN_MARGIN - GALLERY_HEIGHT),
            pos2(column_right, area.max.y - COLUMN_MARGIN),
        );
        let info_top = area.min.y + RETURN_BAR_HEIGHT + 2.0 * COLUMN_MARGIN;
        let info = Rect::from_min_max(
            pos2(column_left, info_top),
            pos2(column_right, (gallery.min.y - COLUMN_MARGIN).max(info_top)),
        );

        Self {
            return_bar,
            image_frame: frame_rect(&style.frame, area, viewport.size()),
            info,
            gallery,
        }
    }
}

/// Resolve a frame style to a rectangle inside `parent`, padding removed.
fn frame_rect(style: &FrameStyle, parent: Rect, viewport: egui::Vec2) -> Rect {
    let vp = [viewport.x, viewport.y];
    let (w, h) = (parent.width(), parent.height());
    let left = style.left.resolve(w, vp).unwrap_or(0.0);
    let top = style.top.resolve(h, vp).unwrap_or(0.0);
    let width = style
        .width
        .resolve(w, vp)
        .unwrap_or_else(|| w - left - style.right.resolve(w, vp).unwrap_or(0.0));
    let height = style
        .height
        .resolve(h, vp)
        .unwrap_or_else(|| h - top - style.bottom.resolve(h, vp).unwrap_or(0.0));
    Rect::from_min_size(
        parent.min + vec2(left, top),
        vec2(width.max(0.0), height.max(0.0)),
    )
    .shrink(style.padding)
}

/// Largest image size allowed by `style` inside `frame`. `Auto` follows the
/// image's aspect ratio, bounded by the frame.
fn image_max_size(style: &ImageStyle, frame: Rect, viewport: egui::Vec2) -> egui::Vec2 {
    let vp = [viewport.x, viewport.y];
    vec2(
        style.width.resolve(frame.width(), vp).unwrap_or(frame.width()),
        style.height.resolve(frame.height(), vp).unwrap_or(frame.height()),
    )
}

/// Keep the scene host's idea of the info panel in step with the layout.
/// Called from the map panel as well so the first slide is measured against
/// the real panel size.
pub(crate) fn sync_host(ctx: &egui::Context, ui: &egui::Ui, app: &mut TravelMapApp, area: Rect) {
    let layout = PopupLayout::new(area, ctx.content_rect(), &app.popup.view().focus_style);
    let divider = DIVIDER_SPACING + ui.spacing().item_spacing.y;
    app.popup
        .view_mut()
        .host_mut()
        .set_panel_size(layout.info.size(), divider);
}

pub fn show(ctx: &egui::Context, app: &mut TravelMapApp) {
    let viewport = ctx.content_rect();
    let slide_width = app.config.gallery.slide_width;
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let area = ui.available_rect_before_wrap();
        sync_host(ctx, ui, app, area);

        let scroll = app.popup.view_mut().take_scroll_request();
        let scene = app.popup.view();
        let layout = PopupLayout::new(area, viewport, &scene.focus_style);

        return_button(ui, layout.return_bar, scene, &mut events);
        if scene.focus_style.frame.z_index <= 0 {
            main_image(ui, layout.image_frame, viewport.size(), scene, &mut events);
        }
        info_panel(ui, layout.info, scene, scroll, &mut events);
        gallery_strip(ui, layout.gallery, scene, slide_width, &mut events);
    });

    let scene = app.popup.view();
    if scene.focus_style.frame.z_index > 0 {
        focused_image(ctx, viewport, scene, &mut events);
    }

    for event in events {
        app.dispatch(event);
    }
}

fn return_button(ui: &mut egui::Ui, bar: Rect, scene: &Scene, events: &mut Vec<PopupEvent>) {
    if !scene.return_button_visible {
        return;
    }
    let rect = Rect::from_min_size(
        pos2(bar.max.x - 160.0 - COLUMN_MARGIN, bar.min.y + 6.0),
        vec2(160.0, bar.height() - 12.0),
    );
    if ui.put(rect, egui::Button::new("\u{2190} Return to map")).clicked() {
        events.push(PopupEvent::Close);
    }
}

fn main_image(
    ui: &mut egui::Ui,
    frame: Rect,
    viewport: egui::Vec2,
    scene: &Scene,
    events: &mut Vec<PopupEvent>,
) {
    let Some(ref url) = scene.main_image else {
        return;
    };
    let max = image_max_size(&scene.focus_style.image, frame, viewport);
    let image = egui::Image::from_uri(url.as_str())
        .max_size(max)
        .show_loading_spinner(true)
        .sense(egui::Sense::click());
    let response = ui
        .put(frame, image)
        .on_hover_cursor(egui::CursorIcon::ZoomIn);
    if response.clicked() {
        events.push(PopupEvent::MainImageClicked);
    }
}

/// Image frame drawn over everything else while the image has focus.
fn focused_image(ctx: &egui::Context, viewport: Rect, scene: &Scene, events: &mut Vec<PopupEvent>) {
    let style = &scene.focus_style;
    let outer = frame_rect(
        &FrameStyle {
            padding: 0.0,
            ..style.frame
        },
        viewport,
        viewport.size(),
    );
    let inner = outer.shrink(style.frame.padding);

    egui::Area::new(egui::Id::new("image_focus"))
        .order(egui::Order::Foreground)
        .fixed_pos(outer.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(outer, 0.0, rgba_color(style.frame.background));
            // Swallow clicks that miss the image.
            ui.allocate_rect(outer, egui::Sense::click());

            if let Some(ref url) = scene.main_image {
                let max = image_max_size(&style.image, inner, viewport.size());
                let image = egui::Image::from_uri(url.as_str())
                    .max_size(max)
                    .sense(egui::Sense::click());
                let response = ui
                    .put(inner, image)
                    .on_hover_cursor(egui::CursorIcon::ZoomOut);
                if response.clicked() {
                    events.push(PopupEvent::MainImageClicked);
                }
            }
        });
}

fn info_panel(
    ui: &mut egui::Ui,
    rect: Rect,
    scene: &Scene,
    scroll: Option<ScrollTarget>,
    events: &mut Vec<PopupEvent>,
) {
    let scrolling = scene.info_overflow == InfoOverflow::Scroll;
    let mut column = ui.new_child(egui::UiBuilder::new().max_rect(rect));

    egui::ScrollArea::vertical()
        .id_salt("popup_info")
        .max_height(rect.height())
        .auto_shrink([false, false])
        .scroll_source(if scrolling {
            egui::scroll_area::ScrollSource::ALL
        } else {
            egui::scroll_area::ScrollSource::NONE
        })
        .scroll_bar_visibility(if scrolling {
            egui::scroll_area::ScrollBarVisibility::VisibleWhenNeeded
        } else {
            egui::scroll_area::ScrollBarVisibility::AlwaysHidden
        })
        .show(&mut column, |ui| {
            ui.set_max_width(rect.width());

            let title = ui.label(
                egui::RichText::new(&scene.title)
                    .font(region_font(TextRegion::Title))
                    .strong(),
            );
            ui.add(egui::Separator::default().spacing(DIVIDER_SPACING));
            ui.label(
                egui::RichText::new(&scene.tombstone)
                    .font(region_font(TextRegion::Tombstone))
                    .italics(),
            );
            ui.add(egui::Separator::default().spacing(DIVIDER_SPACING));
            let description = ui.label(
                egui::RichText::new(&scene.description).font(region_font(TextRegion::Description)),
            );

            match scroll {
                Some(target @ ScrollTarget::Title) => title.scroll_to_me(Some(scroll_align(target))),
                Some(target @ ScrollTarget::Description) => {
                    description.scroll_to_me(Some(scroll_align(target)))
                }
                None => {}
            }
        });

    if scene.read_more == ReadMore::Visible {
        let button_rect = Rect::from_min_max(
            pos2(rect.min.x, rect.max.y - READ_MORE_HEIGHT),
            rect.max,
        );
        ui.painter()
            .rect_filled(button_rect, 0.0, ui.visuals().panel_fill);
        if ui.put(button_rect, egui::Button::new("Read more")).clicked() {
            events.push(PopupEvent::ReadMore);
        }
    }
}

/// The title is brought in by its top edge, the description by its end.
fn scroll_align(target: ScrollTarget) -> egui::Align {
    match target {
        ScrollTarget::Title => egui::Align::TOP,
        ScrollTarget::Description => egui::Align::BOTTOM,
    }
}

fn gallery_strip(
    ui: &mut egui::Ui,
    rect: Rect,
    scene: &Scene,
    slide_width: f32,
    events: &mut Vec<PopupEvent>,
) {
    let prev_rect = Rect::from_min_size(rect.min, vec2(ARROW_WIDTH, rect.height()));
    let next_rect = Rect::from_min_max(pos2(rect.max.x - ARROW_WIDTH, rect.min.y), rect.max);
    let track = Rect::from_min_max(
        pos2(prev_rect.max.x, rect.min.y),
        pos2(next_rect.min.x.max(prev_rect.max.x), rect.max.y),
    );

    let secs = scene.gallery_transition.map_or(0.0, |t| t.duration_secs);
    let offset = ui
        .ctx()
        .animate_value_with_time(ui.id().with("gallery_offset"), scene.gallery_offset, secs);

    let mut strip = ui.new_child(egui::UiBuilder::new().max_rect(track));
    strip.set_clip_rect(track.intersect(ui.clip_rect()));

    for (i, url) in scene.thumbnails.iter().enumerate() {
        let x = track.min.x + offset + i as f32 * slide_width;
        let thumb = Rect::from_min_size(
            pos2(x + THUMB_GAP / 2.0, track.min.y),
            vec2((slide_width - THUMB_GAP).max(1.0), track.height()),
        );
        if !thumb.intersects(track) {
            continue;
        }

        let image = egui::Image::from_uri(url.as_str())
            .fit_to_exact_size(thumb.size())
            .sense(egui::Sense::click());
        let response = strip.put(thumb, image);
        if scene.main_image.as_deref() == Some(url.as_str()) {
            strip.painter().rect_stroke(
                response.rect,
                2.0,
                egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
                egui::StrokeKind::Outside,
            );
        }
        if response.clicked() {
            events.push(PopupEvent::Thumbnail(i));
        }
    }

    for (arrow, label, affordance, event) in [
        (prev_rect, "\u{25c0}", scene.prev_button, PopupEvent::PreviousSlide),
        (next_rect, "\u{25b6}", scene.next_button, PopupEvent::NextSlide),
    ] {
        let text = egui::RichText::new(label)
            .size(28.0)
            .color(rgba_color(affordance.color()));
        if ui.put(arrow, egui::Button::new(text).frame(false)).clicked() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 800.0))
    }

    #[test]
    fn windowed_frame_fills_left_half() {
        let style = FocusStyle::windowed();
        let frame = frame_rect(&style.frame, screen(), screen().size());
        assert_eq!(frame.min, pos2(40.0, 80.0));
        assert_eq!(frame.max, pos2(600.0, 760.0));
    }

    #[test]
    fn fullscreen_frame_covers_viewport_minus_padding() {
        let style = FocusStyle::fullscreen();
        let frame = frame_rect(&style.frame, screen(), screen().size());
        assert_eq!(frame.min, pos2(20.0, 20.0));
        assert_eq!(frame.max, pos2(1180.0, 780.0));

        let max = image_max_size(&style.image, frame, screen().size());
        assert_eq!(max, vec2(1160.0, 760.0));
    }

    #[test]
    fn description_scrolls_to_its_end() {
        assert_eq!(scroll_align(ScrollTarget::Description), egui::Align::BOTTOM);
        assert_eq!(scroll_align(ScrollTarget::Title), egui::Align::TOP);
    }

    #[test]
    fn info_column_sits_right_of_center() {
        let layout = PopupLayout::new(screen(), screen(), &FocusStyle::windowed());
        assert!(layout.info.min.x > screen().center().x);
        assert!(layout.info.max.y <= layout.gallery.min.y);
        assert!(layout.image_frame.max.x <= layout.info.min.x);
    }
}
