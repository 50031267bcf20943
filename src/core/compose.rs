//! Collage compositing: thumbnail resize, row-major paste, and the border
//! step. Thumbnailing is a pure transform; callers' images are never mutated.
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{RgbImage, imageops};
use tracing::debug;

use crate::core::grid::GridShape;
use crate::core::layout::{canvas_dimensions, cell_position};
use crate::error::{Error, Result};
use crate::types::BACKGROUND;

/// Largest size fitting within `(bound_width, bound_height)` that preserves
/// the aspect ratio of `width` x `height`. Never upscales: an image already
/// inside the bound keeps its original dimensions.
pub fn thumbnail_dimensions(
    width: u32,
    height: u32,
    bound_width: u32,
    bound_height: u32,
) -> (u32, u32) {
    if width <= bound_width && height <= bound_height {
        return (width, height);
    }

    let scale = (bound_width as f64 / width as f64).min(bound_height as f64 / height as f64);
    let new_width = ((width as f64 * scale).round() as u32).max(1);
    let new_height = ((height as f64 * scale).round() as u32).max(1);
    (new_width, new_height)
}

/// Produce a thumbnail of `image` fitting within the bound, returning a new
/// image and leaving the source untouched.
pub fn make_thumbnail(image: &RgbImage, bound_width: u32, bound_height: u32) -> Result<RgbImage> {
    let (new_width, new_height) =
        thumbnail_dimensions(image.width(), image.height(), bound_width, bound_height);

    if (new_width, new_height) == (image.width(), image.height()) {
        return Ok(image.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_raw().clone(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(new_width, new_height, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbImage::from_raw(new_width, new_height, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized buffer does not match target dimensions".into()))
}

/// Compose `images` onto a white canvas in row-major input order.
///
/// The canvas is sized by the grid formula; each image is thumbnailed to the
/// bound and pasted with its top-left corner at its cell position. Images
/// beyond `shape.capacity()` land at positions past the grid and are clipped
/// at the canvas edge rather than rejected.
pub fn create_collage(
    images: &[RgbImage],
    shape: GridShape,
    thumb_width: u32,
    thumb_height: u32,
    padding: u32,
) -> Result<RgbImage> {
    if !images.is_empty() && shape.cols == 0 {
        return Err(Error::Processing(format!(
            "grid {shape} cannot hold {} images",
            images.len()
        )));
    }

    let (canvas_width, canvas_height) =
        canvas_dimensions(shape, thumb_width, thumb_height, padding);
    let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, BACKGROUND);

    for (i, img) in images.iter().enumerate() {
        let thumb = make_thumbnail(img, thumb_width, thumb_height)?;
        let (x, y) = cell_position(i, shape, thumb_width, thumb_height, padding);
        debug!(
            "Pasting image {} ({}x{}) at ({}, {})",
            i,
            thumb.width(),
            thumb.height(),
            x,
            y
        );
        imageops::replace(&mut canvas, &thumb, x, y);
    }

    Ok(canvas)
}

/// Wrap `image` in a white border of `padding` pixels on every side.
pub fn add_border(image: &RgbImage, padding: u32) -> RgbImage {
    let mut bordered = RgbImage::from_pixel(
        image.width() + 2 * padding,
        image.height() + 2 * padding,
        BACKGROUND,
    );
    imageops::replace(&mut bordered, image, padding as i64, padding as i64);
    bordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const RED: Rgb<u8> = Rgb([200, 30, 30]);

    fn solid(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
        RgbImage::from_pixel(width, height, color)
    }

    #[test]
    fn thumbnails_never_upscale() {
        assert_eq!(thumbnail_dimensions(40, 30, 100, 100), (40, 30));
        let small = solid(40, 30, RED);
        let thumb = make_thumbnail(&small, 100, 100).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (40, 30));
    }

    #[test]
    fn thumbnails_fit_the_bound_preserving_aspect() {
        assert_eq!(thumbnail_dimensions(200, 100, 50, 50), (50, 25));
        assert_eq!(thumbnail_dimensions(100, 200, 50, 50), (25, 50));
        let wide = solid(200, 100, RED);
        let thumb = make_thumbnail(&wide, 50, 50).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (50, 25));
    }

    #[test]
    fn thumbnailing_does_not_mutate_the_source() {
        let source = solid(200, 100, RED);
        let _ = make_thumbnail(&source, 50, 50).unwrap();
        assert_eq!((source.width(), source.height()), (200, 100));
        assert_eq!(*source.get_pixel(0, 0), RED);
    }

    #[test]
    fn collage_canvas_matches_the_grid_formula() {
        let images = vec![solid(10, 10, RED); 4];
        let shape = GridShape { cols: 2, rows: 2 };
        let collage = create_collage(&images, shape, 10, 10, 4).unwrap();
        assert_eq!((collage.width(), collage.height()), (24, 24));
    }

    #[test]
    fn images_land_in_row_major_cells_with_white_gaps() {
        let images = vec![solid(10, 10, RED); 2];
        let shape = GridShape { cols: 2, rows: 1 };
        let collage = create_collage(&images, shape, 10, 10, 2).unwrap();
        assert_eq!((collage.width(), collage.height()), (22, 10));

        // first cell, gap, second cell
        assert_eq!(*collage.get_pixel(0, 0), RED);
        assert_eq!(*collage.get_pixel(9, 9), RED);
        assert_eq!(*collage.get_pixel(10, 0), BACKGROUND);
        assert_eq!(*collage.get_pixel(11, 0), BACKGROUND);
        assert_eq!(*collage.get_pixel(12, 0), RED);
        assert_eq!(*collage.get_pixel(21, 9), RED);
    }

    #[test]
    fn excess_images_are_clipped_not_rejected() {
        // Three images on a 2x1 grid: the third cell is below the canvas.
        let images = vec![solid(10, 10, RED); 3];
        let shape = GridShape { cols: 2, rows: 1 };
        let collage = create_collage(&images, shape, 10, 10, 2).unwrap();
        assert_eq!((collage.width(), collage.height()), (22, 10));
    }

    #[test]
    fn border_round_trips_the_original() {
        let inner = solid(10, 10, RED);
        let bordered = add_border(&inner, 3);
        assert_eq!((bordered.width(), bordered.height()), (16, 16));
        assert_eq!(*bordered.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*bordered.get_pixel(15, 15), BACKGROUND);

        let cropped = imageops::crop_imm(&bordered, 3, 3, 10, 10).to_image();
        assert_eq!(cropped, inner);
    }
}
