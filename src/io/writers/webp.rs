use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;
use ::webp::Encoder;

use crate::error::{Error, Result};
use crate::types::{PixelLayout, Raster, WebpMode};

/// Encode `raster` as WebP. `quality` is 0..=100; in lossless mode it trades
/// encode effort for size instead of fidelity.
pub fn encode_webp(raster: &Raster, quality: u8, mode: WebpMode) -> Result<Vec<u8>> {
    let encoder = match raster.layout {
        PixelLayout::Rgb => Encoder::from_rgb(&raster.data, raster.width, raster.height),
        PixelLayout::Rgba => Encoder::from_rgba(&raster.data, raster.width, raster.height),
    };
    let lossless = matches!(mode, WebpMode::Lossless);
    let memory = encoder
        .encode_simple(lossless, f32::from(quality.min(100)))
        .map_err(|e| Error::Encode(format!("{:?}", e)))?;
    Ok(memory.to_vec())
}

pub fn write_webp(output: &Path, raster: &Raster, quality: u8, mode: WebpMode) -> Result<()> {
    let bytes = encode_webp(raster, quality, mode)?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    debug!(
        bytes = bytes.len(),
        %mode,
        quality,
        "Wrote {:?}",
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32, layout: PixelLayout) -> Raster {
        let c = layout.channels();
        let mut data = Vec::with_capacity(width as usize * height as usize * c);
        for y in 0..height {
            for x in 0..width {
                let px = [(x * 4) as u8, (y * 4) as u8, 128, 255];
                data.extend_from_slice(&px[..c]);
            }
        }
        Raster::new(width, height, layout, data)
    }

    #[test]
    fn test_encode_lossy_is_webp() {
        let bytes = encode_webp(&gradient(32, 16, PixelLayout::Rgb), 80, WebpMode::Lossy).unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_write_then_decode_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.webp");
        write_webp(&path, &gradient(40, 20, PixelLayout::Rgba), 80, WebpMode::Lossy).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (40, 20));
    }

    #[test]
    fn test_lossless_preserves_pixels() {
        let raster = gradient(8, 8, PixelLayout::Rgb);
        let bytes = encode_webp(&raster, 100, WebpMode::Lossless).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.into_raw(), raster.data);
    }

    #[test]
    fn test_lower_quality_is_smaller() {
        let raster = gradient(64, 64, PixelLayout::Rgb);
        let low = encode_webp(&raster, 5, WebpMode::Lossy).unwrap();
        let high = encode_webp(&raster, 100, WebpMode::Lossy).unwrap();
        assert!(low.len() < high.len());
    }
}
