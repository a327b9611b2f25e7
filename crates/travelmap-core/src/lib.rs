pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod map;
pub mod model;
pub mod popup;
