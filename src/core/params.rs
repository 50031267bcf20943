use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::OutputFormat;

/// Collage parameters suitable for config files and presets.
///
/// Every `None` falls back to the per-folder derivation: the thumbnail bound
/// is the average of the folder's original image dimensions, the border a
/// fifth of the average height, and the cell padding half the border.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollageParams {
    pub format: OutputFormat,
    /// Thumbnail bound override for both dimensions
    pub thumb_size: Option<u32>,
    /// Gap between adjacent thumbnails, in pixels
    pub padding: Option<u32>,
    /// Border width around the finished collage, in pixels
    pub border: Option<u32>,
}

impl Default for CollageParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::TIFF,
            thumb_size: None,
            padding: None,
            border: None,
        }
    }
}

impl CollageParams {
    /// Load parameters from a JSON preset file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_derive_everything_per_folder() {
        let params = CollageParams::default();
        assert_eq!(params.format, OutputFormat::TIFF);
        assert!(params.thumb_size.is_none());
        assert!(params.padding.is_none());
        assert!(params.border.is_none());
    }

    #[test]
    fn presets_round_trip_through_json() {
        let params = CollageParams {
            format: OutputFormat::JPEG,
            thumb_size: Some(256),
            padding: Some(8),
            border: None,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: CollageParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.format, OutputFormat::JPEG);
        assert_eq!(back.thumb_size, Some(256));
        assert_eq!(back.padding, Some(8));
        assert_eq!(back.border, None);
    }

    #[test]
    fn presets_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"format":"TIFF","thumb_size":128,"padding":null,"border":20}}"#
        )
        .unwrap();
        let params = CollageParams::from_json_file(file.path()).unwrap();
        assert_eq!(params.format, OutputFormat::TIFF);
        assert_eq!(params.thumb_size, Some(128));
        assert_eq!(params.border, Some(20));
    }
}
