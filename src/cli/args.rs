use clap::Parser;
use std::path::PathBuf;

use collager::types::OutputFormat;

#[derive(Parser)]
#[command(name = "collager", version, about = "COLLAGER CLI")]
pub struct CliArgs {
    /// Input folder of images (single folder mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory whose subdirectories are each composed into a collage (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single folder mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (defaults to the input directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (tiff or jpeg, default tiff)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Thumbnail bound in pixels for both dimensions.
    /// Default: the average of the folder's original image dimensions
    #[arg(long)]
    pub thumb_size: Option<u32>,

    /// Gap between adjacent thumbnails in pixels.
    /// Default: half the border width
    #[arg(long)]
    pub padding: Option<u32>,

    /// Border width around the finished collage in pixels.
    /// Default: a fifth of the average image height
    #[arg(long)]
    pub border: Option<u32>,

    /// JSON preset file with collage parameters (CLI flags override it)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with the remaining folders when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
