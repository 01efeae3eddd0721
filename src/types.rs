//! Shared types and enums used across thumbkit.
//! Includes `BoundingBox`, `WebpMode`, `ResampleFilter`, and the decoded
//! `Raster` buffer with its `PixelLayout`.
use std::str::FromStr;

use clap::ValueEnum;
use fast_image_resize::{FilterType, PixelType, ResizeAlg};
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Maximum (width, height) a thumbnail may have.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(960, 960)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `WxH` (e.g. `960x960`). A single number is used for both sides.
impl FromStr for BoundingBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::invalid("bounds", s);
        let (w, h) = match s.trim().split_once(['x', 'X']) {
            Some((w, h)) => (w.trim(), h.trim()),
            None => (s.trim(), s.trim()),
        };
        let width = w.parse::<u32>().map_err(|_| invalid())?;
        let height = h.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum WebpMode {
    Lossy,
    Lossless,
}

impl std::fmt::Display for WebpMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebpMode::Lossy => write!(f, "Lossy"),
            WebpMode::Lossless => write!(f, "Lossless"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl ResampleFilter {
    pub fn resize_alg(self) -> ResizeAlg {
        match self {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleFilter::Nearest => "Nearest",
            ResampleFilter::Bilinear => "Bilinear",
            ResampleFilter::CatmullRom => "CatmullRom",
            ResampleFilter::Lanczos3 => "Lanczos3",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PixelLayout {
    Rgb,
    Rgba,
}

impl PixelLayout {
    pub const fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    pub const fn pixel_type(self) -> PixelType {
        match self {
            PixelLayout::Rgb => PixelType::U8x3,
            PixelLayout::Rgba => PixelType::U8x4,
        }
    }
}

/// Decoded 8-bit interleaved pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub data: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * layout.channels()
        );
        Self {
            width,
            height,
            layout,
            data,
        }
    }

    /// Images with an alpha channel keep it; everything else becomes RGB.
    pub fn from_image(img: &DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        if img.color().has_alpha() {
            Self::new(width, height, PixelLayout::Rgba, img.to_rgba8().into_raw())
        } else {
            Self::new(width, height, PixelLayout::Rgb, img.to_rgb8().into_raw())
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
