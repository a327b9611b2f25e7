mod map;
mod ui;

pub use map::MapState;
pub use ui::UIState;
