use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BoundingBox, ResampleFilter, WebpMode};

/// Thumbnail generation parameters suitable for presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailParams {
    /// Output never exceeds this box; smaller images are left at their size
    pub bounds: BoundingBox,
    /// WebP quality, 0..=100
    pub quality: u8,
    pub mode: WebpMode,
    pub filter: ResampleFilter,
}

impl Default for ThumbnailParams {
    fn default() -> Self {
        Self {
            bounds: BoundingBox::default(),
            quality: 80,
            mode: WebpMode::Lossy,
            filter: ResampleFilter::CatmullRom,
        }
    }
}

impl ThumbnailParams {
    pub fn validate(&self) -> Result<()> {
        if self.bounds.width == 0 || self.bounds.height == 0 {
            return Err(Error::ZeroSize {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        validate_quality(self.quality)
    }
}

/// Downscale/filter conversion parameters suitable for presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertParams {
    /// Starting multiplier applied to the original dimensions
    pub scale_factor: f64,
    /// WebP quality, 0..=100
    pub quality: u8,
    /// Neither output side may exceed this
    pub max_dimension: u32,
    /// Amount the factor is lowered by while the candidate is over the cap
    pub step: f64,
    /// Apply the 3x3 smoothing kernel after resampling
    pub smooth: bool,
    pub mode: WebpMode,
    pub filter: ResampleFilter,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            scale_factor: 0.5,
            quality: 80,
            max_dimension: 400,
            step: 0.1,
            smooth: true,
            mode: WebpMode::Lossy,
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl ConvertParams {
    pub fn validate(&self) -> Result<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(Error::invalid("scale_factor", self.scale_factor));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::invalid("step", self.step));
        }
        if self.max_dimension == 0 {
            return Err(Error::ZeroSize {
                width: self.max_dimension,
                height: self.max_dimension,
            });
        }
        validate_quality(self.quality)
    }
}

fn validate_quality(quality: u8) -> Result<()> {
    if quality > 100 {
        return Err(Error::invalid("quality", quality));
    }
    Ok(())
}
