use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use tiff::encoder::{TiffEncoder, colortype};

use crate::error::Result;

/// Write `pages` as a multi-page RGB8 TIFF. One directory entry per page;
/// the collage pipeline produces a single page in practice.
pub fn write_tiff_rgb8(output: &Path, pages: &[RgbImage]) -> Result<()> {
    let file = File::create(output)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    for page in pages {
        encoder.write_image::<colortype::RGB8>(page.width(), page.height(), page.as_raw())?;
    }
    Ok(())
}
