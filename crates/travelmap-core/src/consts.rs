/// Index of the slide selected when a popup opens.
pub const MAIN_IMAGE: usize = 0;

/// Number of slides the gallery stops short of the end.
///
/// The gallery viewport shows more than one slide at a time, so scrolling
/// halts two slides before the last one. This is a fixed policy value and is
/// not derived from the measured viewport width.
pub const GALLERY_SCROLL_BUFFER: usize = 2;

/// Average width of a gallery slide, in pixels. One advance shifts the
/// gallery strip by this amount.
pub const SLIDE_WIDTH: f32 = 400.0;

/// Duration of the animated gallery shift (ease-in-out), in seconds.
pub const SLIDE_TRANSITION_SECS: f32 = 0.4;

/// Base padding unit of the popup info panel, in pixels.
pub const POPUP_INFO_PADDING: f32 = 10.0;

/// How many padding units the overflow check reserves on top of the text.
pub const OVERFLOW_PADDING_MULTIPLIER: f32 = 10.0;

/// Zoom level the map starts at.
pub const INITIAL_ZOOM: f64 = 7.0;

/// Zoom the map flies to before a popup opens, when it is zoomed out further.
pub const LOCAL_ZOOM: f64 = 15.0;

/// Zoom limits.
pub const MAX_ZOOM: f64 = 20.0;
pub const MIN_ZOOM: f64 = 5.0;

/// Initial map centre as `[lat, lng]`.
pub const CENTER: [f64; 2] = [39.85880, -2.6];

/// Corners (`[lat, lng]`) of the area the map may be panned within.
pub const MAXBOUND_CORNER_ONE: [f64; 2] = [46.270583, -14.947324];
pub const MAXBOUND_CORNER_TWO: [f64; 2] = [30.780441, 9.621250];

/// Data file read when no other path is configured.
pub const DEFAULT_DATA_FILE: &str = "Map_Points_Data.json";

/// Opacity of the page title while no popup is shown.
pub const PAGE_TITLE_VISIBLE: f32 = 1.0;
