//! Layout arithmetic: canvas dimensions, per-cell positions, average source
//! dimensions, and spacing derivation.
use image::RgbImage;

use crate::core::grid::GridShape;

/// Spacing derived from the average source height: the gap between adjacent
/// thumbnails and the border width around the finished collage.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Spacing {
    pub cell: u32,
    pub border: u32,
}

/// Derive spacing from the average source height: border is a fifth of it,
/// the inter-thumbnail gap half of that (integer division throughout).
pub fn derive_spacing(avg_height: u32) -> Spacing {
    let border = avg_height / 5;
    Spacing {
        cell: border / 2,
        border,
    }
}

/// Canvas size for a grid of `thumb_width` x `thumb_height` cells separated
/// by `padding`: `cols*tw + (cols-1)*p` by `rows*th + (rows-1)*p`.
pub fn canvas_dimensions(
    shape: GridShape,
    thumb_width: u32,
    thumb_height: u32,
    padding: u32,
) -> (u32, u32) {
    let width = shape.cols * thumb_width + shape.cols.saturating_sub(1) * padding;
    let height = shape.rows * thumb_height + shape.rows.saturating_sub(1) * padding;
    (width, height)
}

/// Top-left paste position of cell `index` in row-major order.
pub fn cell_position(
    index: usize,
    shape: GridShape,
    thumb_width: u32,
    thumb_height: u32,
    padding: u32,
) -> (i64, i64) {
    let col = index as u32 % shape.cols;
    let row = index as u32 / shape.cols;
    (
        (col * (thumb_width + padding)) as i64,
        (row * (thumb_height + padding)) as i64,
    )
}

/// Integer mean of the original (pre-resize) dimensions, or `None` for an
/// empty list.
pub fn average_dimensions(images: &[RgbImage]) -> Option<(u32, u32)> {
    if images.is_empty() {
        return None;
    }
    let total_width: u64 = images.iter().map(|img| img.width() as u64).sum();
    let total_height: u64 = images.iter().map(|img| img.height() as u64).sum();
    let n = images.len() as u64;
    Some(((total_width / n) as u32, (total_height / n) as u32))
}
