//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode, resize, and encode errors, and provides
//! semantic variants for argument validation and compositing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF encode error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Resize buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Parameter file error: {0}")]
    Params(#[from] serde_json::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Compositing error: {0}")]
    Processing(String),
}
