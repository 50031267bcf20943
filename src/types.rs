//! Shared types and enums used across COLLAGER.
//! Includes the `OutputFormat` selector and the white canvas background.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum OutputFormat {
    TIFF,
    JPEG, // Lossy, preview only
}

impl OutputFormat {
    /// File extension used for output naming in batch mode.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::TIFF => "tiff",
            OutputFormat::JPEG => "jpg",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::TIFF => write!(f, "TIFF"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

/// Canvas and border background color.
pub const BACKGROUND: image::Rgb<u8> = image::Rgb([255, 255, 255]);
