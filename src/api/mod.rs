//! High-level, ergonomic library API: single-file thumbnail and conversion
//! helpers, plus batch helpers that walk one directory level. Prefer these
//! entrypoints over the low-level processing modules when integrating thumbkit.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::{ConvertParams, ThumbnailParams};
use crate::core::processing::pipeline::{convert_pipeline, thumbnail_pipeline};
use crate::error::Result;
use crate::io::naming::{background_file_name, thumbnail_file_name};
use crate::io::reader::read_raster;
use crate::io::scan::{SourceFilter, scan_directory};
use crate::io::writers::write_webp;

/// One written output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedImage {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Source (width, height)
    pub original: (u32, u32),
    /// Output (width, height)
    pub size: (u32, u32),
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Create `background_<stem>.webp` next to `input`.
pub fn create_thumbnail(input: &Path, params: &ThumbnailParams) -> Result<DerivedImage> {
    let output = sibling(input, background_file_name(input)?);
    create_thumbnail_at(input, &output, params)
}

/// Create a thumbnail of `input` at an explicit `output` path.
pub fn create_thumbnail_at(
    input: &Path,
    output: &Path,
    params: &ThumbnailParams,
) -> Result<DerivedImage> {
    params.validate()?;

    let raster = read_raster(input)?;
    let original = raster.dimensions();
    let thumb = thumbnail_pipeline(&raster, params)?;
    drop(raster);

    write_webp(output, &thumb, params.quality, params.mode)?;

    Ok(DerivedImage {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        original,
        size: thumb.dimensions(),
    })
}

/// Downscale under the dimension cap, smooth, and re-encode `input` to `output`.
pub fn convert_to_webp(
    input: &Path,
    output: &Path,
    params: &ConvertParams,
) -> Result<DerivedImage> {
    params.validate()?;

    let raster = read_raster(input)?;
    let original = raster.dimensions();
    let converted = convert_pipeline(&raster, params)?;
    drop(raster);

    write_webp(output, &converted, params.quality, params.mode)?;

    Ok(DerivedImage {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        original,
        size: converted.dimensions(),
    })
}

/// Thumbnail every source in `dir` into `output_dir` (default: `dir`).
/// `on_saved` is called after each file is written.
/// If `continue_on_error` is true, failures are logged and counted in the report; otherwise, the first error is returned.
pub fn generate_thumbnails_in_directory<F>(
    dir: &Path,
    output_dir: Option<&Path>,
    params: &ThumbnailParams,
    continue_on_error: bool,
    on_saved: F,
) -> Result<BatchReport>
where
    F: FnMut(&DerivedImage),
{
    params.validate()?;
    let output_dir = output_dir.unwrap_or(dir);

    process_directory(
        dir,
        output_dir,
        &SourceFilter::thumbnails(),
        continue_on_error,
        on_saved,
        |source| {
            let output = output_dir.join(background_file_name(source)?);
            create_thumbnail_at(source, &output, params)
        },
    )
}

/// Convert every source in `dir` to `thumbnail_<name>` in `output_dir` (default: `dir`).
/// `on_converted` is called after each file is written.
/// If `continue_on_error` is true, failures are logged and counted in the report; otherwise, the first error is returned.
pub fn convert_directory<F>(
    dir: &Path,
    output_dir: Option<&Path>,
    params: &ConvertParams,
    continue_on_error: bool,
    on_converted: F,
) -> Result<BatchReport>
where
    F: FnMut(&DerivedImage),
{
    params.validate()?;
    let output_dir = output_dir.unwrap_or(dir);

    process_directory(
        dir,
        output_dir,
        &SourceFilter::conversions(),
        continue_on_error,
        on_converted,
        |source| {
            let output = output_dir.join(thumbnail_file_name(source)?);
            convert_to_webp(source, &output, params)
        },
    )
}

fn process_directory<F, P>(
    dir: &Path,
    output_dir: &Path,
    filter: &SourceFilter,
    continue_on_error: bool,
    mut on_written: F,
    mut process: P,
) -> Result<BatchReport>
where
    F: FnMut(&DerivedImage),
    P: FnMut(&Path) -> Result<DerivedImage>,
{
    info!("Starting batch processing from directory: {:?}", dir);

    // Listing is taken up front so outputs written below are never picked up
    let scan = scan_directory(dir, filter)?;
    fs::create_dir_all(output_dir)?;
    info!("Output directory: {:?}", output_dir);

    let mut report = BatchReport {
        skipped: scan.skipped,
        ..Default::default()
    };

    for source in &scan.sources {
        info!("Processing: {:?}", source);
        match process(source) {
            Ok(derived) => {
                info!(
                    "Successfully processed: {:?} -> {:?} ({}x{} -> {}x{})",
                    derived.source,
                    derived.output,
                    derived.original.0,
                    derived.original.1,
                    derived.size.0,
                    derived.size.1
                );
                on_written(&derived);
                report.processed += 1;
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", source, e);
            }
        }
    }

    info!(
        processed = report.processed,
        skipped = report.skipped,
        errors = report.errors,
        "Batch processing complete"
    );
    Ok(report)
}

fn sibling(input: &Path, name: std::ffi::OsString) -> PathBuf {
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
