//! Output writers for composed collages.
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::error::Result;
use crate::types::OutputFormat;

pub mod tiff;

pub use tiff::write_tiff_rgb8;

/// Persist a composed collage in the requested format. TIFF goes through the
/// multi-page-capable encoder; JPEG is single-page by nature.
pub fn save_collage(image: &RgbImage, output: &Path, format: OutputFormat) -> Result<()> {
    info!(
        "Saving {}x{} collage as {} to {:?}",
        image.width(),
        image.height(),
        format,
        output
    );
    match format {
        OutputFormat::TIFF => write_tiff_rgb8(output, std::slice::from_ref(image)),
        OutputFormat::JPEG => {
            image.save_with_format(output, ImageFormat::Jpeg)?;
            Ok(())
        }
    }
}
