//! I/O layer: decoding source images into rasters (`reader`), selecting
//! source files in a directory (`scan`), derived file names (`naming`), and
//! `writers` for WebP output.
pub mod naming;
pub mod reader;
pub mod scan;
pub mod writers;

pub use naming::{background_file_name, thumbnail_file_name};
pub use reader::read_raster;
pub use scan::{DirectoryScan, SourceFilter, scan_directory};
