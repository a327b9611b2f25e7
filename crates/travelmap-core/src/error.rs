use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid feature data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Feature #{index} is invalid: {reason}")]
    InvalidFeature { index: usize, reason: String },

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Unknown popup event: {0}")]
    InvalidEvent(String),

    #[error("Cannot open a popup without images")]
    EmptyGallery,

    #[error("Slide index {index} out of range (total: {total})")]
    SlideOutOfRange { index: usize, total: usize },

    #[error("Fullscreen request failed: {0}")]
    Fullscreen(String),
}

pub type Result<T> = std::result::Result<T, TravelMapError>;
