use tracing::debug;

use crate::core::params::{ConvertParams, ThumbnailParams};
use crate::core::processing::resize::resize_raster;
use crate::core::processing::scale::{scaled_size, thumbnail_size};
use crate::core::processing::smooth::smooth;
use crate::error::Result;
use crate::types::Raster;

/// Shrink to fit the bounding box; images already inside it pass through.
pub fn thumbnail_pipeline(raster: &Raster, params: &ThumbnailParams) -> Result<Raster> {
    let (width, height) = thumbnail_size(raster.dimensions(), params.bounds);
    resize_raster(raster, width, height, params.filter)
}

/// Scale under the dimension cap, resample, then optionally smooth.
pub fn convert_pipeline(raster: &Raster, params: &ConvertParams) -> Result<Raster> {
    let (width, height) = scaled_size(
        raster.dimensions(),
        params.scale_factor,
        params.max_dimension,
        params.step,
    )?;
    let resized = resize_raster(raster, width, height, params.filter)?;

    if params.smooth {
        debug!("Applying smoothing filter");
        Ok(smooth(&resized))
    } else {
        Ok(resized)
    }
}
