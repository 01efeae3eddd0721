use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use thumbkit::ResampleFilter;

#[derive(Parser)]
#[command(name = "thumbkit", version, about = "thumbkit CLI")]
pub struct CliArgs {
    /// Enable debug logging (otherwise RUST_LOG is honored, default warn)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// Print the batch report as JSON when a directory run finishes
    #[arg(long, global = true, default_value_t = false)]
    pub report: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write background_<name>.webp copies that fit inside a bounding box
    Thumbnail(ThumbnailArgs),
    /// Write thumbnail_<name> copies scaled under a size cap and smoothed
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct ThumbnailArgs {
    /// Directory to process (batch mode); defaults to the current directory
    #[arg(short, long, conflicts_with = "input")]
    pub dir: Option<PathBuf>,

    /// Single image to process (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output filename (single file mode); defaults to background_<stem>.webp beside the input
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Write outputs here instead of next to the sources (batch mode)
    #[arg(long, conflicts_with = "input")]
    pub output_dir: Option<PathBuf>,

    /// Bounding box as WIDTHxHEIGHT
    #[arg(long, default_value = "960x960")]
    pub bounds: String,

    /// WebP quality (0-100)
    #[arg(short, long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: u8,

    /// Encode lossless WebP instead of lossy
    #[arg(long, default_value_t = false)]
    pub lossless: bool,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::CatmullRom)]
    pub filter: ResampleFilter,

    /// Batch mode: continue with the remaining files when one fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Directory to process (batch mode); defaults to the current directory
    #[arg(short, long, conflicts_with = "input")]
    pub dir: Option<PathBuf>,

    /// Single image to process (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output filename (single file mode); defaults to thumbnail_<name> beside the input
    #[arg(short, long, requires = "input")]
    pub output: Option<PathBuf>,

    /// Write outputs here instead of next to the sources (batch mode)
    #[arg(long, conflicts_with = "input")]
    pub output_dir: Option<PathBuf>,

    /// Starting scale factor (e.g. 0.35 for 35%)
    #[arg(short, long, default_value_t = 0.5)]
    pub scale: f64,

    /// WebP quality (0-100)
    #[arg(short, long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: u8,

    /// Neither output side may exceed this many pixels
    #[arg(long, default_value_t = 400)]
    pub max_dimension: u32,

    /// Skip the smoothing filter
    #[arg(long, default_value_t = false)]
    pub no_smooth: bool,

    /// Encode lossless WebP instead of lossy
    #[arg(long, default_value_t = false)]
    pub lossless: bool,

    /// Resampling filter
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Batch mode: continue with the remaining files when one fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,
}
