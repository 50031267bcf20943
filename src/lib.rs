#![doc = r#"
COLLAGER — a batch grid-collage builder.

This crate turns folders of images into single bordered collages: it collects
the `jpg`/`jpeg`/`png` files under a folder, solves a near-square grid for the
count, thumbnails each image to the folder's average dimensions, composes them
row-major onto a white canvas, wraps the result in a white border, and saves
it as a (multi-page-capable) TIFF or a JPEG. It powers the COLLAGER CLI and
can be embedded in your own Rust applications.

Quick start: compose one folder to a file
-----------------------------------------
```rust,no_run
use std::path::Path;
use collager::{CollageParams, process_folder_to_path};

fn main() -> collager::Result<()> {
    let params = CollageParams::default();
    let written = process_folder_to_path(
        Path::new("/photos/vacation"),
        Path::new("/photos/vacation.tiff"),
        &params,
    )?;
    assert!(written, "folder held no qualifying images");
    Ok(())
}
```

Batch: one collage per subdirectory
-----------------------------------
```rust,no_run
use std::path::Path;
use collager::{CollageParams, process_directory_to_path};

fn main() -> collager::Result<()> {
    let params = CollageParams::default();
    let report = process_directory_to_path(
        Path::new("/photos"),
        Path::new("/photos"),
        &params,
        true, // continue_on_error
    )?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

In-memory composition
---------------------
```rust,no_run
use std::path::Path;
use collager::{CollageParams, compose_folder_to_buffer};

fn main() -> collager::Result<()> {
    if let Some(collage) = compose_folder_to_buffer(Path::new("/photos/pets"), &CollageParams::default())? {
        println!(
            "{} images on a {} grid, canvas {}x{}",
            collage.image_count,
            collage.shape,
            collage.image.width(),
            collage.image.height()
        );
    }
    Ok(())
}
```

The grid solver on its own
--------------------------
```rust
use collager::GridShape;

let shape = GridShape::solve(6);
assert_eq!((shape.cols, shape.rows), (3, 2));
assert_eq!(GridShape::solve(13), GridShape { cols: 1, rows: 13 });
```

Error handling
--------------
All public functions return `collager::Result<T>`; match on `collager::Error`
to handle specific cases, e.g. decode or encode failures. By default a bad
image aborts the run; pass `continue_on_error` to the batch helper to isolate
failures per folder instead.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — grid solver, layout arithmetic, and the compositor.
- [`io`] — folder scanning and TIFF/JPEG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::grid::GridShape;
pub use core::layout::{Spacing, derive_spacing};
pub use core::params::CollageParams;
pub use error::{Error, Result};
pub use types::OutputFormat;

// Compositing primitives
pub use core::compose::{add_border, create_collage, make_thumbnail};

// Scanning and writers
pub use io::scan::{QUALIFYING_EXTENSIONS, collect_image_paths, load_images};
pub use io::writers::save_collage;

// High-level API re-exports
pub use api::{
    BatchReport, ComposedCollage, compose_folder_to_buffer, iterate_folders,
    process_directory_to_path, process_folder_to_path,
};
