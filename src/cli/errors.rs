use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Thumbnail size must be greater than 0, got: {size}")]
    ZeroThumbSize { size: u32 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },
}
