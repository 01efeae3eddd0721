use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use thumbkit::{
    BatchReport, BoundingBox, ConvertParams, DerivedImage, ThumbnailParams, WebpMode,
    convert_directory, convert_to_webp, create_thumbnail, create_thumbnail_at,
    generate_thumbnails_in_directory, io::thumbnail_file_name,
};

use super::args::{CliArgs, Command, ConvertArgs, ThumbnailArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn webp_mode(lossless: bool) -> WebpMode {
    if lossless {
        WebpMode::Lossless
    } else {
        WebpMode::Lossy
    }
}

/// The library needs an explicit directory; only the CLI falls back to the cwd.
fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(AppError::CurrentDir),
    }
}

fn print_thumbnail_saved(derived: &DerivedImage) {
    println!("Thumbnail saved: {}", derived.output.display());
}

/// `{:?}` keeps the `.0` on whole factors (`1.0`, not `1`).
fn conversion_summary(derived: &DerivedImage, params: &ConvertParams) -> String {
    format!(
        "Converted {} to {} with scale factor {:?} and quality {}.",
        derived.source.display(),
        derived.output.display(),
        params.scale_factor,
        params.quality
    )
}

fn finish_batch(report: BatchReport, print_report: bool) -> Result<(), AppError> {
    if report.errors > 0 {
        warn!("{} file(s) failed", report.errors);
    }
    if print_report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn run_thumbnail(args: ThumbnailArgs, print_report: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bounds = args
        .bounds
        .parse::<BoundingBox>()
        .map_err(|_| AppError::InvalidBounds {
            bounds: args.bounds.clone(),
        })?;

    let params = ThumbnailParams {
        bounds,
        quality: args.quality,
        mode: webp_mode(args.lossless),
        filter: args.filter,
    };

    if let Some(input) = args.input {
        let derived = match args.output {
            Some(output) => create_thumbnail_at(&input, &output, &params)?,
            None => create_thumbnail(&input, &params)?,
        };
        print_thumbnail_saved(&derived);
        return Ok(());
    }

    let dir = resolve_dir(args.dir)?;
    info!("Generating thumbnails in {:?} (bounds {})", dir, params.bounds);

    let report = generate_thumbnails_in_directory(
        &dir,
        args.output_dir.as_deref(),
        &params,
        args.keep_going,
        print_thumbnail_saved,
    )?;
    finish_batch(report, print_report)?;
    Ok(())
}

fn run_convert(args: ConvertArgs, print_report: bool) -> Result<(), Box<dyn std::error::Error>> {
    let params = ConvertParams {
        scale_factor: args.scale,
        quality: args.quality,
        max_dimension: args.max_dimension,
        smooth: !args.no_smooth,
        mode: webp_mode(args.lossless),
        filter: args.filter,
        ..Default::default()
    };

    let print_converted = |derived: &DerivedImage| {
        println!("{}", conversion_summary(derived, &params));
    };

    if let Some(input) = args.input {
        let output = match args.output {
            Some(output) => output,
            None => input.with_file_name(thumbnail_file_name(&input)?),
        };
        let derived = convert_to_webp(&input, &output, &params)?;
        print_converted(&derived);
        return Ok(());
    }

    let dir = resolve_dir(args.dir)?;
    info!(
        "Converting images in {:?} (scale factor {}, cap {})",
        dir, params.scale_factor, params.max_dimension
    );

    let report = convert_directory(
        &dir,
        args.output_dir.as_deref(),
        &params,
        args.keep_going,
        print_converted,
    )?;
    finish_batch(report, print_report)?;
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match args.command {
        Command::Thumbnail(thumbnail) => run_thumbnail(thumbnail, args.report),
        Command::Convert(convert) => run_convert(convert, args.report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derived(source: &str, output: &str) -> DerivedImage {
        DerivedImage {
            source: PathBuf::from(source),
            output: PathBuf::from(output),
            original: (800, 600),
            size: (400, 300),
        }
    }

    #[test]
    fn test_conversion_summary_whole_factor_keeps_decimal() {
        let params = ConvertParams {
            scale_factor: 1.0,
            ..Default::default()
        };
        assert_eq!(
            conversion_summary(&derived("art.webp", "thumbnail_art.webp"), &params),
            "Converted art.webp to thumbnail_art.webp with scale factor 1.0 and quality 80."
        );
    }

    #[test]
    fn test_conversion_summary_fractional_factor() {
        let params = ConvertParams {
            scale_factor: 0.35,
            quality: 60,
            ..Default::default()
        };
        assert_eq!(
            conversion_summary(&derived("a.webp", "thumbnail_a.webp"), &params),
            "Converted a.webp to thumbnail_a.webp with scale factor 0.35 and quality 60."
        );
    }

    #[test]
    fn test_webp_mode_flag() {
        assert_eq!(webp_mode(true), WebpMode::Lossless);
        assert_eq!(webp_mode(false), WebpMode::Lossy);
    }
}
