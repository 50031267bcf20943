//! High-level, ergonomic library API: compose a folder of images to a file or
//! an in-memory buffer, plus batch helpers for directories of folders. Prefer
//! these entrypoints over the low-level `core` modules when integrating
//! COLLAGER.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{info, warn};

use crate::core::compose::{add_border, create_collage};
use crate::core::grid::GridShape;
use crate::core::layout::{average_dimensions, derive_spacing};
use crate::core::params::CollageParams;
use crate::error::{Error, Result};
use crate::io::scan::{collect_image_paths, load_images};
use crate::io::writers::save_collage;

/// Result of in-memory composition
#[derive(Debug, Clone)]
pub struct ComposedCollage {
    /// The bordered collage, ready to persist
    pub image: RgbImage,
    pub shape: GridShape,
    pub image_count: usize,
    pub thumb_width: u32,
    pub thumb_height: u32,
    pub padding: u32,
    pub border: u32,
}

/// Outcome counters for a batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Compose a folder's images into a bordered collage in memory (no output
/// I/O). Returns `None` when the folder holds no qualifying images.
///
/// The pipeline is pure per folder: collect, decode, solve the grid from the
/// count, derive the thumbnail bound and spacing from this folder's original
/// dimensions (unless overridden in `params`), composite, border.
pub fn compose_folder_to_buffer(
    folder: &Path,
    params: &CollageParams,
) -> Result<Option<ComposedCollage>> {
    let paths = collect_image_paths(folder)?;
    if paths.is_empty() {
        return Ok(None);
    }

    let images = load_images(&paths)?;
    let shape = GridShape::solve(images.len() as u32);

    let (avg_width, avg_height) = average_dimensions(&images)
        .ok_or_else(|| Error::Processing("no decodable images collected".into()))?;
    let (thumb_width, thumb_height) = match params.thumb_size {
        Some(size) => (size, size),
        None => (avg_width, avg_height),
    };

    let spacing = derive_spacing(thumb_height);
    let padding = params.padding.unwrap_or(spacing.cell);
    let border = params.border.unwrap_or(spacing.border);

    info!(
        "Composing {} images on a {} grid (thumb {}x{}, padding {}, border {})",
        images.len(),
        shape,
        thumb_width,
        thumb_height,
        padding,
        border
    );

    let collage = create_collage(&images, shape, thumb_width, thumb_height, padding)?;
    let bordered = add_border(&collage, border);

    Ok(Some(ComposedCollage {
        image: bordered,
        shape,
        image_count: images.len(),
        thumb_width,
        thumb_height,
        padding,
        border,
    }))
}

/// Compose a folder and persist the result at `output`. Returns `false` when
/// the folder was skipped for holding no qualifying images.
pub fn process_folder_to_path(
    folder: &Path,
    output: &Path,
    params: &CollageParams,
) -> Result<bool> {
    match compose_folder_to_buffer(folder, params)? {
        Some(collage) => {
            save_collage(&collage.image, output, params.format)?;
            Ok(true)
        }
        None => {
            info!("Skipping folder with no qualifying images: {:?}", folder);
            Ok(false)
        }
    }
}

/// Immediate subdirectories of `input_dir`, in deterministic (name-sorted)
/// order. Non-directory entries are silently skipped.
pub fn iterate_folders(input_dir: &Path) -> Result<impl Iterator<Item = PathBuf>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs.into_iter())
}

/// Compose every subdirectory of `input_dir` into `<output_dir>/<folder>.<ext>`.
/// If `continue_on_error` is true, per-folder errors are logged in the report
/// and processing continues; otherwise, the first error is returned.
///
/// Each folder completes, including its save, before the next one begins.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &CollageParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for folder in iterate_folders(input_dir)? {
        let folder_name = match folder.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        let output_path =
            output_dir.join(format!("{}.{}", folder_name, params.format.extension()));

        info!("Processing: {:?} -> {:?}", folder, output_path);

        match process_folder_to_path(&folder, &output_path, params) {
            Ok(true) => report.processed += 1,
            Ok(false) => report.skipped += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", folder, e);
            }
        }
    }

    Ok(report)
}
