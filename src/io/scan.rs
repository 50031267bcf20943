//! Folder scanning: recursive collection of qualifying image files and
//! decoding into RGB buffers.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;

/// Extensions that qualify a file for collection. The match is exact and
/// case-sensitive: `photo.JPG` does not qualify.
pub const QUALIFYING_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Whether `path` names a qualifying image file.
pub fn is_qualifying(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| QUALIFYING_EXTENSIONS.contains(&ext))
}

/// Recursively collect the qualifying image paths under `folder`, in
/// deterministic (name-sorted) order.
pub fn collect_image_paths(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_qualifying(entry.path()) {
            paths.push(entry.path().to_path_buf());
        }
    }
    Ok(paths)
}

/// Decode every path into an RGB image, preserving input order.
pub fn load_images(paths: &[PathBuf]) -> Result<Vec<RgbImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        debug!("Loading image: {:?}", path);
        let img = image::open(path)?;
        images.push(img.to_rgb8());
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn qualifying_extensions_are_exact_and_case_sensitive() {
        assert!(is_qualifying(Path::new("a.jpg")));
        assert!(is_qualifying(Path::new("b.jpeg")));
        assert!(is_qualifying(Path::new("c.png")));
        assert!(!is_qualifying(Path::new("d.JPG")));
        assert!(!is_qualifying(Path::new("e.Png")));
        assert!(!is_qualifying(Path::new("f.gif")));
        assert!(!is_qualifying(Path::new("noextension")));
    }

    #[test]
    fn collection_is_recursive_filtered_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("b.png"));
        touch(&root.join("a.jpg"));
        touch(&root.join("notes.txt"));
        touch(&root.join("loud.JPG"));
        fs::create_dir(root.join("nested")).unwrap();
        touch(&root.join("nested").join("c.jpeg"));

        let paths = collect_image_paths(root).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.png", "nested/c.jpeg"]);
    }

    #[test]
    fn empty_folder_collects_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_image_paths(dir.path()).unwrap().is_empty());
    }
}
