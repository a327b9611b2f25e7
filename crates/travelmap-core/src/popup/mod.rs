pub mod controller;
pub mod event;
pub mod gallery;
pub mod overflow;
pub mod scene;
pub mod selector;
pub mod style;
pub mod view;

pub use controller::{FocusState, PopupController, PopupVisibility};
pub use event::{parse_event_list, PopupEvent};
pub use gallery::{GalleryState, GalleryTrack};
pub use overflow::OverflowGate;
pub use scene::{PopupScene, SceneHost, TextRegion};
pub use selector::SlideSelector;
pub use view::PopupView;
