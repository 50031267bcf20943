use tracing::{info, warn};

use collager::api::{process_directory_to_path, process_folder_to_path};
use collager::core::params::CollageParams;

use super::args::CliArgs;
use super::errors::AppError;

fn build_params(args: &CliArgs) -> Result<CollageParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => CollageParams::from_json_file(path)?,
        None => CollageParams::default(),
    };

    // CLI flags override the preset file
    if let Some(format) = args.format {
        params.format = format;
    }
    if let Some(size) = args.thumb_size {
        if size == 0 {
            return Err(AppError::ZeroThumbSize { size }.into());
        }
        params.thumb_size = Some(size);
    }
    if args.padding.is_some() {
        params.padding = args.padding;
    }
    if args.border.is_some() {
        params.border = args.border;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = build_params(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        // Collages land next to their folders unless redirected
        let output_dir = args.output_dir.unwrap_or_else(|| input_dir.clone());

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, args.batch)?;

        info!("Batch processing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        if process_folder_to_path(&input, &output, &params)? {
            info!("Successfully processed: {:?} -> {:?}\n", input, output);
        } else {
            warn!("No qualifying images in {:?}, nothing written", input);
        }
    }

    Ok(())
}
