//! I/O layer: folder scanning/decoding and collage writers.
pub mod scan;
pub use scan::{QUALIFYING_EXTENSIONS, collect_image_paths, is_qualifying, load_images};

pub mod writers;
pub use writers::save_collage;
