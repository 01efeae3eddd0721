use std::path::Path;

use image::ImageReader;
use tracing::debug;

use crate::error::Result;
use crate::types::Raster;

/// Decode any format the `image` crate understands. The format is sniffed
/// from the file contents, not the extension.
pub fn read_raster(path: &Path) -> Result<Raster> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded {:?}",
        path
    );
    Ok(Raster::from_image(&img))
}
