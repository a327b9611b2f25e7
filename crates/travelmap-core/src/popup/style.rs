//! Style values the popup writes to its rendering surface.
//!
//! Lengths mirror the CSS units the overlay layout is expressed in, so a
//! renderer can resolve them against its own parent and viewport sizes.

/// A layout length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// No value; the renderer falls back to its default layout.
    Unset,
    Auto,
    Px(f32),
    Percent(f32),
    Vw(f32),
    Vh(f32),
}

impl Length {
    /// Resolve against a parent extent and the viewport size (`[w, h]`).
    /// `Unset` and `Auto` resolve to `None`.
    pub fn resolve(&self, parent: f32, viewport: [f32; 2]) -> Option<f32> {
        match *self {
            Self::Unset | Self::Auto => None,
            Self::Px(v) => Some(v),
            Self::Percent(p) => Some(parent * p / 100.0),
            Self::Vw(p) => Some(viewport[0] * p / 100.0),
            Self::Vh(p) => Some(viewport[1] * p / 100.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Placement of the main image frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub top: Length,
    pub left: Length,
    pub right: Length,
    pub bottom: Length,
    pub width: Length,
    pub height: Length,
    pub z_index: i32,
    pub padding: f32,
    pub background: Rgba,
}

/// Size of the image inside the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageStyle {
    pub width: Length,
    pub height: Length,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusStyle {
    pub frame: FrameStyle,
    pub image: ImageStyle,
}

impl FocusStyle {
    /// The image panel beside the info column. Also the initial style.
    pub const fn windowed() -> Self {
        Self {
            frame: FrameStyle {
                top: Length::Px(80.0),
                left: Length::Px(40.0),
                right: Length::Vw(50.0),
                bottom: Length::Px(40.0),
                width: Length::Unset,
                height: Length::Unset,
                z_index: 0,
                padding: 0.0,
                background: Rgba::new(0, 0, 0, 0.0),
            },
            image: ImageStyle {
                width: Length::Percent(100.0),
                height: Length::Percent(100.0),
            },
        }
    }

    /// The image frame covering the whole viewport.
    pub const fn fullscreen() -> Self {
        Self {
            frame: FrameStyle {
                top: Length::Px(0.0),
                left: Length::Px(0.0),
                right: Length::Unset,
                bottom: Length::Unset,
                width: Length::Vw(100.0),
                height: Length::Vh(100.0),
                z_index: 1,
                padding: 20.0,
                background: Rgba::new(0, 0, 0, 0.9),
            },
            image: ImageStyle {
                width: Length::Auto,
                height: Length::Percent(100.0),
            },
        }
    }
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self::windowed()
    }
}

/// State of a navigation arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Enabled,
    Disabled,
}

impl Affordance {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Arrow colour: white when usable, dark gray when not.
    pub fn color(self) -> Rgba {
        match self {
            Self::Enabled => Rgba::new(255, 255, 255, 0.8),
            Self::Disabled => Rgba::new(169, 169, 169, 0.5),
        }
    }
}
